//! Socket code classification.
//!
//! Every text frame starts with a short decimal code identifying its
//! engine- or message-level purpose:
//!
//! | Code | Meaning              | Direction     | Payload        |
//! |------|----------------------|---------------|----------------|
//! | `0`  | Open                 | server→client | optional       |
//! | `1`  | Close                | either        | none           |
//! | `2`  | Ping                 | server→client | none           |
//! | `3`  | Pong                 | client→server | none           |
//! | `40` | Message/Connect      | either        | sometimes      |
//! | `41` | Message/Disconnect   | either        | none           |
//! | `42` | Message/Event (RPC)  | either        | always, array  |
//! | `43` | Message/Ack          | either        | always, array  |
//! | `44` | Message/Error        | either        | always, object |
//!
//! Any other digit run on the wire is a protocol error.

use crate::error::KajiwotoError;

/// Socket code at the head of every text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocketCode {
    /// `0` - transport session opened, payload carries session parameters.
    Open,
    /// `1` - transport session closed.
    Close,
    /// `2` - server liveness probe; answered with [`SocketCode::Pong`].
    Ping,
    /// `3` - client liveness answer.
    Pong,
    /// `40` - message-level connect; carries the auth request/response.
    Connect,
    /// `41` - message-level disconnect.
    Disconnect,
    /// `42` - RPC event, payload is a `[action, args…]` tuple.
    Event,
    /// `43` - RPC acknowledgement.
    Ack,
    /// `44` - message-level error, payload is an object.
    ConnectError,
}

impl SocketCode {
    /// The wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            SocketCode::Open => "0",
            SocketCode::Close => "1",
            SocketCode::Ping => "2",
            SocketCode::Pong => "3",
            SocketCode::Connect => "40",
            SocketCode::Disconnect => "41",
            SocketCode::Event => "42",
            SocketCode::Ack => "43",
            SocketCode::ConnectError => "44",
        }
    }

    /// Whether frames of this code may legally carry a JSON body.
    pub fn may_carry_payload(&self) -> bool {
        matches!(
            self,
            SocketCode::Open
                | SocketCode::Connect
                | SocketCode::Event
                | SocketCode::Ack
                | SocketCode::ConnectError
        )
    }
}

impl std::fmt::Display for SocketCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SocketCode {
    type Err = KajiwotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(SocketCode::Open),
            "1" => Ok(SocketCode::Close),
            "2" => Ok(SocketCode::Ping),
            "3" => Ok(SocketCode::Pong),
            "40" => Ok(SocketCode::Connect),
            "41" => Ok(SocketCode::Disconnect),
            "42" => Ok(SocketCode::Event),
            "43" => Ok(SocketCode::Ack),
            "44" => Ok(SocketCode::ConnectError),
            other => Err(KajiwotoError::Protocol(format!(
                "unrecognized socket code {other:?}"
            ))),
        }
    }
}
