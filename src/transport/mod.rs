//! Transport module - framed text transport over WebSocket.
//!
//! The backend speaks UTF-8 text frames end-to-end; binary frames are
//! protocol errors. Transport-level ping/pong is handled below this layer,
//! the engine-level ping (socket code `2`) is handled by the session
//! client's default handler.

mod ws;

pub use ws::WsTransport;
