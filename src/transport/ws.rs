//! WebSocket transport wrapper.
//!
//! Splits the upgraded stream into a read half and a write half, each
//! behind its own async mutex. Concurrent sends serialize on the write
//! mutex; the client adds no further queueing. Reads hand back the next
//! *text* frame: transport ping/pong frames are skipped (tungstenite
//! queues the pong reply internally), binary frames are rejected and a
//! close frame surfaces as [`KajiwotoError::ConnectionClosed`].

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::{KajiwotoError, Result};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A connected text-frame transport.
pub struct WsTransport {
    writer: Mutex<SplitSink<WsStream, Message>>,
    reader: Mutex<SplitStream<WsStream>>,
}

impl WsTransport {
    /// Dial the endpoint (`ws://` or `wss://`) and perform the upgrade.
    pub async fn connect(endpoint: &str) -> Result<Self> {
        let (stream, _response) = connect_async(endpoint).await?;
        let (writer, reader) = stream.split();
        Ok(Self {
            writer: Mutex::new(writer),
            reader: Mutex::new(reader),
        })
    }

    /// Write one text frame.
    pub async fn send_text(&self, text: String) -> Result<()> {
        let mut writer = self.writer.lock().await;
        writer.send(Message::Text(text)).await?;
        Ok(())
    }

    /// Read the next text frame.
    pub async fn read_text(&self) -> Result<String> {
        let mut reader = self.reader.lock().await;
        loop {
            match reader.next().await {
                None => return Err(KajiwotoError::ConnectionClosed),
                Some(message) => match message? {
                    Message::Text(text) => return Ok(text),
                    Message::Binary(data) => {
                        return Err(KajiwotoError::Protocol(format!(
                            "server did not respond with a text frame ({} binary bytes)",
                            data.len()
                        )))
                    }
                    Message::Close(_) => return Err(KajiwotoError::ConnectionClosed),
                    Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => continue,
                },
            }
        }
    }

    /// Send a close frame; errors from an already-dead peer are ignored.
    pub async fn close(&self) {
        let mut writer = self.writer.lock().await;
        let _ = writer.send(Message::Close(None)).await;
    }
}

impl std::fmt::Debug for WsTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WsTransport").finish_non_exhaustive()
    }
}
