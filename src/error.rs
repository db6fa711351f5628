//! Error types for kajiwoto-client.

use thiserror::Error;

/// Main error type for all client operations.
#[derive(Debug, Error)]
pub enum KajiwotoError {
    /// Empty username/password/token handed to a login-style call.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// A call-site argument was outside its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A frame or its JSON body could not be decoded.
    #[error("unable to parse message: {0}")]
    Parse(String),

    /// Wrong frame kind, unexpected socket code, malformed auth reply.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The server answered the auth frame with an error-shaped message.
    #[error("server rejected authentication: {0}")]
    AuthRejected(String),

    /// No auth reply arrived within the connect deadline.
    #[error("connection timeout")]
    ConnectTimeout,

    /// `connect` was called on a client that already holds a connection.
    #[error("client is already connected")]
    AlreadyConnected,

    /// A direct read was attempted while the listen loop owns the socket.
    #[error("client is already listening for new messages")]
    AlreadyListening,

    /// The transport closed underneath us.
    #[error("connection closed")]
    ConnectionClosed,

    /// I/O error from the underlying transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// WebSocket error, propagated verbatim.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// HTTP transport error from the query client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The GraphQL endpoint reported errors alongside (or instead of) data.
    #[error("GraphQL error: {0}")]
    GraphQl(String),
}

/// Result type alias using KajiwotoError.
pub type Result<T> = std::result::Result<T, KajiwotoError>;
