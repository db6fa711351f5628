//! Handler module - per-frame message handlers and their registry.
//!
//! A handler is a user-supplied async function invoked for every inbound
//! frame. Handlers signal one of three outcomes: handled successfully,
//! [`HandlerError::NotAddressed`] ("not mine, try the others"), or a real
//! failure. One-shot handlers are removed from the registry after their
//! first success; the not-addressed sentinel never removes them and is
//! never surfaced to users.

mod registry;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

use crate::error::KajiwotoError;
use crate::protocol::Frame;

pub use registry::HandlerRegistry;

/// Outcome of a single handler invocation.
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// Boxed future returned by handler functions.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error side of a handler invocation.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The frame was not addressed to this handler.
    ///
    /// Internal sentinel: it neither removes a one-shot handler nor is
    /// reported anywhere.
    #[error("unable to handle message")]
    NotAddressed,

    /// The handler recognized the frame but failed to process it.
    #[error(transparent)]
    Other(#[from] KajiwotoError),
}

/// Type-erased handler function.
pub(crate) type HandlerFn = Arc<dyn Fn(Frame) -> BoxFuture<'static, HandlerResult> + Send + Sync>;

/// A registered message handler.
pub struct MessageHandler {
    key: String,
    handle: HandlerFn,
    remove_on_success: bool,
}

impl MessageHandler {
    /// The registry key identifying this handler.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the handler is removed after its first success.
    pub fn remove_on_success(&self) -> bool {
        self.remove_on_success
    }

    /// Invoke the handler for one frame.
    pub fn call(&self, frame: Frame) -> BoxFuture<'static, HandlerResult> {
        (self.handle)(frame)
    }
}

impl std::fmt::Debug for MessageHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageHandler")
            .field("key", &self.key)
            .field("remove_on_success", &self.remove_on_success)
            .finish_non_exhaustive()
    }
}

impl MessageHandler {
    pub(crate) fn new<F, Fut>(key: String, handle: F, remove_on_success: bool) -> Self
    where
        F: Fn(Frame) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self {
            key,
            handle: Arc::new(move |frame| -> BoxFuture<'static, HandlerResult> {
                Box::pin(handle(frame))
            }),
            remove_on_success,
        }
    }
}
