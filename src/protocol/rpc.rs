//! Tuple-positional RPC codec.
//!
//! An RPC payload is a JSON array whose first element is the action tag and
//! whose remaining elements are positional arguments. The arity and type of
//! each slot depend on the action; slots carrying no client information are
//! serialized as the empty object `{}` and must be preserved.
//!
//! [`SlotReader`] performs the best-match binding of payload elements to
//! typed slots: each slot tries the not-yet-taken elements in order, and the
//! first element that decodes into the target type is bound to the slot and
//! removed from further consideration. Struct decoding ignores unknown
//! fields but refuses missing required fields, which is what lets a typed
//! slot skip past a `{}` placeholder instead of misbinding it.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{KajiwotoError, Result};

/// A decoded RPC payload: action tag plus positional arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RpcEnvelope {
    /// Action tag from index 0 of the tuple.
    pub action: String,
    /// Positional arguments, retained as parsed JSON values.
    pub args: Vec<Value>,
}

impl RpcEnvelope {
    /// Create an empty envelope for the given action.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            args: Vec::new(),
        }
    }

    /// Append a positional argument, serialized by ordinary JSON rules.
    pub fn arg<T: Serialize>(mut self, value: &T) -> Result<Self> {
        self.args.push(serde_json::to_value(value)?);
        Ok(self)
    }

    /// Serialize as the wire tuple `[action, arg1, …, argN]`.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut tuple = Vec::with_capacity(self.args.len() + 1);
        tuple.push(Value::String(self.action.clone()));
        tuple.extend(self.args.iter().cloned());
        Ok(Bytes::from(serde_json::to_vec(&tuple)?))
    }

    /// Deserialize from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Deserialize from an already-parsed JSON value.
    ///
    /// The value must be an array whose first element is a string.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(mut parts) = value else {
            return Err(KajiwotoError::Parse(
                "cannot deserialize data into rpc message".to_string(),
            ));
        };
        if parts.is_empty() {
            return Err(KajiwotoError::Parse(
                "rpc message carries no action".to_string(),
            ));
        }
        let Value::String(action) = parts.remove(0) else {
            return Err(KajiwotoError::Parse(
                "rpc action is not a string".to_string(),
            ));
        };
        Ok(Self {
            action,
            args: parts,
        })
    }

    /// Start best-match slot binding over the positional arguments.
    pub fn slots(&self) -> SlotReader<'_> {
        SlotReader {
            args: &self.args,
            taken: vec![false; self.args.len()],
        }
    }
}

/// Ordered best-match binding of payload elements to typed slots.
pub struct SlotReader<'a> {
    args: &'a [Value],
    taken: Vec<bool>,
}

impl SlotReader<'_> {
    /// Bind the next slot.
    ///
    /// Tries every remaining element in payload order and takes the first
    /// one that decodes into `T`. Returns `None` if no element matches.
    pub fn next<T: DeserializeOwned>(&mut self) -> Option<T> {
        for (index, value) in self.args.iter().enumerate() {
            if self.taken[index] {
                continue;
            }
            if let Ok(decoded) = serde_json::from_value::<T>(value.clone()) {
                self.taken[index] = true;
                return Some(decoded);
            }
        }
        None
    }
}
