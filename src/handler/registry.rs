//! Handler registry with snapshot dispatch.
//!
//! The table is guarded by a reader/writer lock: dispatch captures a
//! snapshot under the shared lock, mutation takes the exclusive lock.
//! Dispatch runs against the frame-point snapshot, so handlers added while
//! a frame is being dispatched never observe that same frame. Each handler
//! runs on its own task; ordering across handlers (and across frames for a
//! single handler) is deliberately undefined.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

use super::{HandlerError, HandlerResult, MessageHandler};
use crate::protocol::Frame;

/// Registry of message handlers keyed by fresh unique ids.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: RwLock<HashMap<String, Arc<MessageHandler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler and return its key.
    ///
    /// With `remove_on_success` the handler is removed after the first
    /// invocation that returns `Ok`.
    pub fn add<F, Fut>(&self, handle: F, remove_on_success: bool) -> String
    where
        F: Fn(Frame) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        let key = Uuid::new_v4().to_string();
        let handler = Arc::new(MessageHandler::new(key.clone(), handle, remove_on_success));
        self.write_table().insert(key.clone(), handler);
        tracing::debug!(key = %key, autoremove = remove_on_success, "added message handler");
        key
    }

    /// Remove a handler; no-op when the key is unknown.
    pub fn remove(&self, key: &str) {
        self.write_table().remove(key);
        tracing::debug!(key = %key, "removed message handler");
    }

    /// Drop every handler.
    pub fn remove_all(&self) {
        *self.write_table() = HashMap::new();
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.read_table().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read_table().is_empty()
    }

    /// Read-consistent snapshot of the current handlers.
    pub fn snapshot(&self) -> Vec<Arc<MessageHandler>> {
        self.read_table().values().cloned().collect()
    }

    /// Fan one frame out to a snapshot of the current handlers.
    ///
    /// Every handler runs on its own task. Successful one-shot handlers
    /// are removed afterwards under the write lock; the not-addressed
    /// sentinel is ignored and other errors are logged without aborting
    /// dispatch.
    pub fn dispatch(self: &Arc<Self>, frame: &Frame) {
        for handler in self.snapshot() {
            let registry = Arc::clone(self);
            let frame = frame.clone();
            tokio::spawn(async move {
                match handler.call(frame).await {
                    Ok(()) => {
                        if handler.remove_on_success() {
                            registry.remove(handler.key());
                            tracing::debug!(
                                key = %handler.key(),
                                "removed message handler after successful execution"
                            );
                        }
                    }
                    Err(HandlerError::NotAddressed) => {}
                    Err(err) => {
                        tracing::warn!(key = %handler.key(), error = %err, "message handler failed");
                    }
                }
            });
        }
    }

    fn read_table(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<MessageHandler>>> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_table(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Arc<MessageHandler>>> {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
