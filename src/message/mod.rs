//! RPC message catalog.
//!
//! Typed variants for every RPC action the backend speaks, with `to/from`
//! contracts against the tuple-positional codec. Outgoing variants append
//! their slots in wire order; incoming variants rebuild themselves through
//! best-match slot binding, so a leading `{}` placeholder never misbinds.
//!
//! The `userStatus` action is overloaded by direction and resolved
//! structurally: a server push is a single-element payload whose only key
//! is `data`, a client message carries a top-level `status` among two or
//! more elements. Resolve by trying [`UserStatusUpdate`] first, then
//! [`UserStatusMessage`].
//!
//! # Example
//!
//! ```
//! use kajiwoto_client::message::{actions, LoginMessage, RpcMessage};
//! use kajiwoto_client::protocol::Frame;
//!
//! # fn main() -> kajiwoto_client::Result<()> {
//! let login = LoginMessage::default();
//! let frame = Frame::event(&login.to_envelope()?)?;
//! let envelope = frame.rpc_envelope()?;
//! assert_eq!(envelope.action, actions::LOGIN);
//! assert!(LoginMessage::from_envelope(&envelope).is_some());
//! # Ok(())
//! # }
//! ```

pub mod fields;

use serde_json::Value;

use crate::error::Result;
use crate::protocol::RpcEnvelope;
use fields::{
    ChatActivityData, ChatMessageCreate, ChatRoomData, ChatRoomId, ChatSubmitData, Empty, Secret,
    SubscribeArgs, UserData, UserStatus, UserStatusData,
};

/// Action tags at index 0 of the RPC tuple.
pub mod actions {
    pub const CHAT_ACTIVITY: &str = "chatActivity";
    pub const CHAT_ENTER: &str = "chatEnter";
    pub const CHAT_LEAVE: &str = "chatLeave";
    pub const CHAT_SEND: &str = "chatSend";
    pub const CHAT_SUBMIT: &str = "chatSubmit";
    pub const LIVE_SUB: &str = "liveSub";
    pub const LOGIN: &str = "login";
    pub const SUBSCRIBE: &str = "subscribe";
    pub const TYPING: &str = "typing";
    pub const USER_STATUS: &str = "userStatus";
}

/// Subtypes of the `chatActivity` push, carried in `data.action`.
pub mod activity {
    pub const ACTIVITY: &str = "activity";
    pub const JOIN_ROOM: &str = "join-room";
    pub const MESSAGE: &str = "message";
    pub const PET_MESSAGE: &str = "petMessage";
}

/// A typed RPC message variant.
pub trait RpcMessage: Sized {
    /// Action tag identifying this variant on the wire.
    const ACTION: &'static str;

    /// Serialize into the positional envelope.
    fn to_envelope(&self) -> Result<RpcEnvelope>;

    /// Rebuild from a decoded envelope.
    ///
    /// Returns `None` when the envelope belongs to a different variant;
    /// callers then try the next candidate. Slots that cannot be bound
    /// fall back to their default value.
    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self>;
}

/// True for a single-element payload whose only key is `data`.
fn server_shaped(args: &[Value]) -> bool {
    args.len() == 1
        && args[0]
            .as_object()
            .is_some_and(|obj| obj.len() == 1 && obj.contains_key("data"))
}

/// True for a multi-element payload carrying a top-level `status`.
fn client_shaped(args: &[Value]) -> bool {
    args.len() >= 2 && args.iter().any(|arg| arg.get("status").is_some())
}

/// `login` (client→server): announce identity and presence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginMessage {
    pub user_data: UserData,
    pub user_status: UserStatus,
    pub secret: Secret,
}

impl RpcMessage for LoginMessage {
    const ACTION: &'static str = actions::LOGIN;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION)
            .arg(&self.user_data)?
            .arg(&self.user_status)?
            .arg(&self.secret)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            user_data: slots.next().unwrap_or_default(),
            user_status: slots.next().unwrap_or_default(),
            secret: slots.next().unwrap_or_default(),
        })
    }
}

/// `userStatus` (client→server): refresh presence, mirrors [`LoginMessage`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStatusMessage {
    pub user_data: UserData,
    pub user_status: UserStatus,
    pub secret: Secret,
}

impl RpcMessage for UserStatusMessage {
    const ACTION: &'static str = actions::USER_STATUS;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION)
            .arg(&self.user_data)?
            .arg(&self.user_status)?
            .arg(&self.secret)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION || !client_shaped(&envelope.args) {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            user_data: slots.next().unwrap_or_default(),
            user_status: slots.next().unwrap_or_default(),
            secret: slots.next().unwrap_or_default(),
        })
    }
}

/// `userStatus` (server→client): presence confirmation push.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStatusUpdate {
    pub status_data: UserStatusData,
}

impl RpcMessage for UserStatusUpdate {
    const ACTION: &'static str = actions::USER_STATUS;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION).arg(&self.status_data)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION || !server_shaped(&envelope.args) {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            status_data: slots.next().unwrap_or_default(),
        })
    }
}

/// `subscribe` (client→server): follow one or more chat rooms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscribeMessage {
    pub user_data: UserData,
    pub subscribe_args: SubscribeArgs,
    pub secret: Secret,
}

impl RpcMessage for SubscribeMessage {
    const ACTION: &'static str = actions::SUBSCRIBE;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION)
            .arg(&self.user_data)?
            .arg(&self.subscribe_args)?
            .arg(&self.secret)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            user_data: slots.next().unwrap_or_default(),
            subscribe_args: slots.next().unwrap_or_default(),
            secret: slots.next().unwrap_or_default(),
        })
    }
}

/// `liveSub` (client→server): both leading slots are always empty on the
/// initial call; their meaning is unknown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveSubMessage {
    pub reserved1: Empty,
    pub reserved2: Empty,
    pub secret: Secret,
}

impl RpcMessage for LiveSubMessage {
    const ACTION: &'static str = actions::LIVE_SUB;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION)
            .arg(&self.reserved1)?
            .arg(&self.reserved2)?
            .arg(&self.secret)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            reserved1: slots.next().unwrap_or_default(),
            reserved2: slots.next().unwrap_or_default(),
            secret: slots.next().unwrap_or_default(),
        })
    }
}

/// `typing` (client→server): typing indicator for a room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypingMessage {
    pub user_data: UserData,
    pub chat_room: ChatRoomId,
    pub secret: Secret,
}

impl RpcMessage for TypingMessage {
    const ACTION: &'static str = actions::TYPING;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION)
            .arg(&self.user_data)?
            .arg(&self.chat_room)?
            .arg(&self.secret)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            user_data: slots.next().unwrap_or_default(),
            chat_room: slots.next().unwrap_or_default(),
            secret: slots.next().unwrap_or_default(),
        })
    }
}

/// `chatEnter` (client→server): enter a room with recent context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatEnterMessage {
    pub user_data: UserData,
    pub chat_room: ChatRoomData,
    pub secret: Secret,
}

impl RpcMessage for ChatEnterMessage {
    const ACTION: &'static str = actions::CHAT_ENTER;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION)
            .arg(&self.user_data)?
            .arg(&self.chat_room)?
            .arg(&self.secret)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            user_data: slots.next().unwrap_or_default(),
            chat_room: slots.next().unwrap_or_default(),
            secret: slots.next().unwrap_or_default(),
        })
    }
}

/// `chatLeave` (client→server): leave a room; leading slot is a placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatLeaveMessage {
    pub reserved: Empty,
    pub chat_room: ChatRoomId,
    pub secret: Secret,
}

impl RpcMessage for ChatLeaveMessage {
    const ACTION: &'static str = actions::CHAT_LEAVE;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION)
            .arg(&self.reserved)?
            .arg(&self.chat_room)?
            .arg(&self.secret)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            reserved: slots.next().unwrap_or_default(),
            chat_room: slots.next().unwrap_or_default(),
            secret: slots.next().unwrap_or_default(),
        })
    }
}

/// `chatSend` (client→server): post a user message to a room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSendMessage {
    pub user_data: UserData,
    pub create: ChatMessageCreate,
    pub secret: Secret,
}

impl RpcMessage for ChatSendMessage {
    const ACTION: &'static str = actions::CHAT_SEND;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION)
            .arg(&self.user_data)?
            .arg(&self.create)?
            .arg(&self.secret)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            user_data: slots.next().unwrap_or_default(),
            create: slots.next().unwrap_or_default(),
            secret: slots.next().unwrap_or_default(),
        })
    }
}

/// `chatSubmit` (client→server): submit messages for the AI to answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSubmitMessage {
    pub user_data: UserData,
    pub submit: ChatSubmitData,
    pub secret: Secret,
}

impl RpcMessage for ChatSubmitMessage {
    const ACTION: &'static str = actions::CHAT_SUBMIT;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION)
            .arg(&self.user_data)?
            .arg(&self.submit)?
            .arg(&self.secret)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            user_data: slots.next().unwrap_or_default(),
            submit: slots.next().unwrap_or_default(),
            secret: slots.next().unwrap_or_default(),
        })
    }
}

/// `chatActivity` (server→client): room activity push.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatActivityUpdate {
    pub activity_data: ChatActivityData,
}

impl RpcMessage for ChatActivityUpdate {
    const ACTION: &'static str = actions::CHAT_ACTIVITY;

    fn to_envelope(&self) -> Result<RpcEnvelope> {
        RpcEnvelope::new(Self::ACTION).arg(&self.activity_data)
    }

    fn from_envelope(envelope: &RpcEnvelope) -> Option<Self> {
        if envelope.action != Self::ACTION {
            return None;
        }
        let mut slots = envelope.slots();
        Some(Self {
            activity_data: slots.next().unwrap_or_default(),
        })
    }
}
