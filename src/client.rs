//! Session client for the persistent WebSocket backend.
//!
//! The client manages the full session lifecycle:
//! 1. Dial the text-frame transport and read the server open message
//! 2. Install the default ping handler and start the listen loop
//! 3. Authenticate with the API key and wait for the socket id
//! 4. Fan inbound frames out to registered handlers until stopped
//!
//! # Example
//!
//! ```ignore
//! use kajiwoto_client::{KajiwotoSocketClient, SocketCode};
//! use kajiwoto_client::handler::HandlerError;
//!
//! #[tokio::main]
//! async fn main() -> kajiwoto_client::Result<()> {
//!     let client = KajiwotoSocketClient::new(
//!         "wss://socket.example.com/socket.io/?EIO=4&transport=websocket",
//!         "my-api-key",
//!     );
//!
//!     client.add_message_handler(
//!         |frame| async move {
//!             if frame.code != SocketCode::Event {
//!                 return Err(HandlerError::NotAddressed);
//!             }
//!             println!("event: {:?}", frame.rpc_envelope());
//!             Ok(())
//!         },
//!         false,
//!     );
//!
//!     client.connect().await?;
//!     // ... drive the session ...
//!     client.stop_listening();
//!     Ok(())
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use chrono::Timelike;
use tokio::sync::{mpsc, oneshot};

use crate::error::{KajiwotoError, Result};
use crate::handler::{HandlerError, HandlerRegistry, HandlerResult};
use crate::message::fields::{AuthRequest, AuthResponse};
use crate::message::RpcMessage;
use crate::protocol::{Frame, SocketCode};
use crate::transport::WsTransport;

/// How long `connect` waits for the auth reply.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the persistent chat session.
///
/// Cheap to clone; clones share the connection, the socket id and the
/// handler table.
#[derive(Debug, Clone)]
pub struct KajiwotoSocketClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    endpoint: String,
    api_key: String,
    connection: Mutex<Option<Arc<WsTransport>>>,
    socket_id: RwLock<String>,
    listening: AtomicBool,
    shutdown: Mutex<Option<oneshot::Sender<()>>>,
    handlers: Arc<HandlerRegistry>,
}

impl ClientInner {
    fn transport(&self) -> Result<Arc<WsTransport>> {
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| KajiwotoError::Protocol("client is not connected".to_string()))
    }

    fn set_connection(&self, transport: Option<Arc<WsTransport>>) {
        *self
            .connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = transport;
    }

    fn set_socket_id(&self, sid: &str) {
        *self
            .socket_id
            .write()
            .unwrap_or_else(PoisonError::into_inner) = sid.to_string();
    }

    async fn send_frame(&self, frame: &Frame) -> Result<()> {
        let transport = self.transport()?;
        let text = frame.to_text()?;
        tracing::debug!(message = %text, "sending message");
        transport.send_text(text).await
    }
}

impl KajiwotoSocketClient {
    /// Create an idle client for the given endpoint and API key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                endpoint: endpoint.into(),
                api_key: api_key.into(),
                connection: Mutex::new(None),
                socket_id: RwLock::new(String::new()),
                listening: AtomicBool::new(false),
                shutdown: Mutex::new(None),
                handlers: Arc::new(HandlerRegistry::new()),
            }),
        }
    }

    /// Dial the backend and authenticate.
    ///
    /// Fails with [`KajiwotoError::AlreadyConnected`] when a connection
    /// already exists. On auth rejection or timeout the listen loop is
    /// stopped and all handlers are cleared before the error is returned.
    pub async fn connect(&self) -> Result<()> {
        {
            let connection = self
                .inner
                .connection
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if connection.is_some() {
                return Err(KajiwotoError::AlreadyConnected);
            }
        }

        let transport = Arc::new(WsTransport::connect(&self.inner.endpoint).await?);

        // The server opens the session before anything else may happen.
        let text = transport.read_text().await?;
        let open = Frame::parse(text.as_bytes())?;
        if !matches!(open.code, SocketCode::Open | SocketCode::Connect) {
            return Err(KajiwotoError::Protocol(format!(
                "server did not open the session, responded with code {}",
                open.code
            )));
        }

        self.inner.set_connection(Some(transport));
        self.add_default_handlers();
        self.start_listening();

        // One-shot auth handler feeding a single-value channel.
        let (auth_tx, mut auth_rx) = mpsc::channel::<AuthResponse>(1);
        self.inner.handlers.add(
            move |frame| {
                let auth_tx = auth_tx.clone();
                async move {
                    let response = match frame.code {
                        SocketCode::Connect | SocketCode::ConnectError => {
                            match frame.payload_as::<AuthResponse>() {
                                Ok(response) => response,
                                Err(_) => return Err(HandlerError::NotAddressed),
                            }
                        }
                        _ => return Err(HandlerError::NotAddressed),
                    };
                    let _ = auth_tx.try_send(response);
                    Ok(())
                }
            },
            true,
        );

        let auth = AuthRequest {
            api_key: self.inner.api_key.clone(),
        };
        let frame = Frame::with_payload(SocketCode::Connect, serde_json::to_vec(&auth)?);
        self.send_message(&frame).await?;

        match tokio::time::timeout(CONNECT_TIMEOUT, auth_rx.recv()).await {
            Ok(Some(response)) if !response.sid.is_empty() => {
                self.inner.set_socket_id(&response.sid);
                tracing::debug!(socket_id = %response.sid, "assigned socket id");
                Ok(())
            }
            Ok(response) => {
                self.stop_listening();
                self.remove_all_message_handlers();
                let message = response.map(|r| r.message).unwrap_or_default();
                Err(KajiwotoError::AuthRejected(if message.is_empty() {
                    "server returned invalid auth message result".to_string()
                } else {
                    message
                }))
            }
            Err(_elapsed) => {
                self.stop_listening();
                self.remove_all_message_handlers();
                Err(KajiwotoError::ConnectTimeout)
            }
        }
    }

    /// Whether the session is fully established.
    pub fn is_connected(&self) -> bool {
        let connected = self
            .inner
            .connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        connected && !self.socket_id().is_empty()
    }

    /// The server-assigned session id; empty until authentication succeeds.
    pub fn socket_id(&self) -> String {
        self.inner
            .socket_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a message handler; see [`HandlerRegistry::add`].
    pub fn add_message_handler<F, Fut>(&self, handle: F, remove_on_success: bool) -> String
    where
        F: Fn(Frame) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = HandlerResult> + Send + 'static,
    {
        self.inner.handlers.add(handle, remove_on_success)
    }

    /// Remove a single message handler.
    pub fn remove_message_handler(&self, key: &str) {
        self.inner.handlers.remove(key);
    }

    /// Remove every message handler.
    pub fn remove_all_message_handlers(&self) {
        self.inner.handlers.remove_all();
    }

    /// Number of registered message handlers.
    pub fn handler_count(&self) -> usize {
        self.inner.handlers.len()
    }

    /// Handlers required to operate the session long-term.
    fn add_default_handlers(&self) {
        // Ping handler: answer engine pings (code 2) with a bare pong.
        let weak = Arc::downgrade(&self.inner);
        self.inner.handlers.add(
            move |frame| {
                let weak = weak.clone();
                async move {
                    if frame.code != SocketCode::Ping {
                        return Err(HandlerError::NotAddressed);
                    }
                    let Some(inner) = weak.upgrade() else {
                        return Err(HandlerError::NotAddressed);
                    };
                    inner
                        .send_frame(&Frame::bare(SocketCode::Pong))
                        .await
                        .map_err(HandlerError::Other)
                }
            },
            false,
        );
    }

    /// Start the listen loop if it is not already running.
    ///
    /// The flag transition is guarded by compare-and-swap, so at most one
    /// loop exists per session.
    pub fn start_listening(&self) {
        if self
            .inner
            .listening
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let Ok(transport) = self.inner.transport() else {
            self.inner.listening.store(false, Ordering::SeqCst);
            return;
        };

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        *self
            .inner
            .shutdown
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(shutdown_tx);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tracing::debug!("listening to incoming messages");
            while inner.listening.load(Ordering::SeqCst) {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    read = transport.read_text() => match read {
                        Ok(text) => {
                            tracing::debug!(message = %text, "received message");
                            match Frame::parse(text.as_bytes()) {
                                Ok(frame) => inner.handlers.dispatch(&frame),
                                Err(err) => {
                                    tracing::error!(error = %err, "error reading websocket messages");
                                }
                            }
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "error reading websocket messages");
                        }
                    },
                }
            }
            tracing::debug!("stopped listening to incoming messages");
        });
    }

    /// Stop the listen loop. Idempotent.
    ///
    /// Clears the listening flag and fires the shutdown signal; the loop's
    /// pending read returns and the task exits. Handler tasks already in
    /// flight run to completion.
    pub fn stop_listening(&self) {
        if self
            .inner
            .listening
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            if let Some(shutdown) = self
                .inner
                .shutdown
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take()
            {
                let _ = shutdown.send(());
            }
        }
    }

    /// Read one frame directly, outside the listen loop.
    ///
    /// Refused with [`KajiwotoError::AlreadyListening`] while the loop owns
    /// the socket; stop listening first to handle reads manually.
    pub async fn read_message(&self) -> Result<Frame> {
        if self.inner.listening.load(Ordering::SeqCst) {
            return Err(KajiwotoError::AlreadyListening);
        }
        let transport = self.inner.transport()?;
        let text = transport.read_text().await?;
        tracing::debug!(message = %text, "received message");
        Frame::parse(text.as_bytes())
    }

    /// Serialize and send one frame.
    pub async fn send_message(&self, frame: &Frame) -> Result<()> {
        self.inner.send_frame(frame).await
    }

    /// Wrap an RPC message into an event frame and send it.
    pub async fn send_event<M: RpcMessage>(&self, message: &M) -> Result<()> {
        let frame = Frame::event(&message.to_envelope()?)?;
        self.send_message(&frame).await
    }

    /// Local half-hour clock hint for `UserData::time`.
    ///
    /// `hours*100 + (0|30)` from the local wall clock; the backend uses it
    /// to phrase time-of-day responses.
    pub fn local_user_time(&self) -> i64 {
        let now = chrono::Local::now();
        let minutes = if now.minute() < 30 { 0 } else { 30 };
        i64::from(now.hour() * 100 + minutes)
    }
}
