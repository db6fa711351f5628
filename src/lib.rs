//! # kajiwoto-client
//!
//! Rust client SDK for the Kajiwoto chat / AI companion backend.
//!
//! The backend exposes two cooperating surfaces:
//!
//! - **HTTP(S)**: a GraphQL endpoint for authentication, AI-dataset
//!   management and chat-room metadata, served by
//!   [`KajiwotoHttpClient`].
//! - **WebSocket**: a persistent Socket.IO-style session exchanging
//!   tuple-encoded RPC events for presence, room membership, chat
//!   submission and server pushes, served by [`KajiwotoSocketClient`].
//!
//! ## Architecture
//!
//! Inbound bytes flow `transport → protocol::Frame → protocol::RpcEnvelope
//! → message catalog → handlers`; outbound messages take the same path in
//! reverse. Handlers are registered on the session client and invoked
//! concurrently for every inbound frame; one-shot handlers remove
//! themselves after their first success.
//!
//! ## Example
//!
//! ```ignore
//! use kajiwoto_client::message::{LoginMessage, fields::UserStatus};
//! use kajiwoto_client::{secret::message_secret, KajiwotoSocketClient};
//!
//! #[tokio::main]
//! async fn main() -> kajiwoto_client::Result<()> {
//!     let client = KajiwotoSocketClient::new(
//!         "wss://socket.example.com/socket.io/?EIO=4&transport=websocket",
//!         "api-key",
//!     );
//!     client.connect().await?;
//!
//!     client
//!         .send_event(&LoginMessage {
//!             user_data: Default::default(),
//!             user_status: UserStatus {
//!                 friend_ids: None,
//!                 status: "ONLINE".to_string(),
//!             },
//!             secret: message_secret(),
//!         })
//!         .await?;
//!
//!     client.stop_listening();
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod handler;
pub mod http;
pub mod message;
pub mod protocol;
pub mod secret;
pub mod transport;

mod client;

pub use client::KajiwotoSocketClient;
pub use error::{KajiwotoError, Result};
pub use http::KajiwotoHttpClient;
pub use protocol::{Frame, RpcEnvelope, SocketCode};
