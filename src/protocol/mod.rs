//! Protocol module - framed packet codec and tuple-positional RPC codec.
//!
//! The wire carries UTF-8 text frames of the form `<code><json?>`:
//! a short decimal socket code followed, without separator, by an optional
//! JSON body. Event frames (`42`) carry an RPC tuple whose first element
//! is the action tag.

mod code;
mod frame;
mod rpc;

pub use code::SocketCode;
pub use frame::Frame;
pub use rpc::{RpcEnvelope, SlotReader};
