//! Frame codec for the outer `<code><json?>` packet format.
//!
//! Emitting a frame appends the JSON body directly to the code digits with
//! no separator or whitespace. Parsing splits a leading run of ASCII digits
//! from an optional object/array body and keeps the body bytes *raw*; the
//! payload is only JSON-decoded once a handler knows what shape to expect.
//!
//! # Example
//!
//! ```
//! use kajiwoto_client::protocol::{Frame, SocketCode};
//!
//! let frame = Frame::parse(b"40{\"sid\":\"abc\"}").unwrap();
//! assert_eq!(frame.code, SocketCode::Connect);
//! assert_eq!(frame.payload.as_deref(), Some(&b"{\"sid\":\"abc\"}"[..]));
//! assert_eq!(&frame.to_bytes()[..], b"40{\"sid\":\"abc\"}");
//! ```

use bytes::{BufMut, Bytes, BytesMut};
use serde::de::DeserializeOwned;

use super::code::SocketCode;
use super::rpc::RpcEnvelope;
use crate::error::{KajiwotoError, Result};

/// A single framed packet: socket code plus optional raw JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Socket code identifying the frame's purpose.
    pub code: SocketCode,
    /// Raw JSON body, exactly as received or as it will be sent.
    pub payload: Option<Bytes>,
}

impl Frame {
    /// A frame consisting of a bare code, such as the pong answer `3`.
    pub fn bare(code: SocketCode) -> Self {
        Self {
            code,
            payload: None,
        }
    }

    /// A frame carrying an already-serialized JSON body.
    pub fn with_payload(code: SocketCode, payload: impl Into<Bytes>) -> Self {
        Self {
            code,
            payload: Some(payload.into()),
        }
    }

    /// An event frame (`42`) wrapping a serialized RPC envelope.
    pub fn event(envelope: &RpcEnvelope) -> Result<Self> {
        Ok(Self::with_payload(SocketCode::Event, envelope.to_bytes()?))
    }

    /// Serialize the frame to wire bytes: code digits, then the body.
    pub fn to_bytes(&self) -> Bytes {
        let code = self.code.as_str().as_bytes();
        match &self.payload {
            Some(payload) => {
                let mut buf = BytesMut::with_capacity(code.len() + payload.len());
                buf.put_slice(code);
                buf.put_slice(payload);
                buf.freeze()
            }
            None => Bytes::from_static(self.code.as_str().as_bytes()),
        }
    }

    /// Serialize the frame to a wire string.
    ///
    /// Frames are UTF-8 by construction (ASCII code digits plus JSON), so
    /// this only fails if a caller smuggled non-UTF-8 bytes into `payload`.
    pub fn to_text(&self) -> Result<String> {
        String::from_utf8(self.to_bytes().to_vec())
            .map_err(|err| KajiwotoError::Parse(format!("frame is not valid UTF-8: {err}")))
    }

    /// Parse wire bytes into a frame.
    ///
    /// The input is split into a leading run of ASCII digits and an
    /// optional JSON body (object or array). A body is validated for
    /// well-formedness but retained undecoded. A code outside the
    /// recognized set is a protocol error; digits followed by a malformed
    /// body are a parse error.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(KajiwotoError::Parse("empty message".to_string()));
        }

        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        let (code_bytes, body) = bytes.split_at(digits);
        let code_str = std::str::from_utf8(code_bytes)
            .map_err(|err| KajiwotoError::Parse(format!("invalid code bytes: {err}")))?;
        let code: SocketCode = code_str.parse()?;

        if body.is_empty() {
            return Ok(Self::bare(code));
        }

        if body[0] != b'{' && body[0] != b'[' {
            return Err(KajiwotoError::Parse(format!(
                "unable to parse message, body is neither object nor array: {}",
                String::from_utf8_lossy(bytes)
            )));
        }

        // Validate well-formedness only; the raw bytes stay authoritative.
        serde_json::from_slice::<serde::de::IgnoredAny>(body)
            .map_err(|err| KajiwotoError::Parse(format!("malformed message body: {err}")))?;

        Ok(Self::with_payload(code, Bytes::copy_from_slice(body)))
    }

    /// Decode the body into a concrete JSON shape.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.payload {
            Some(payload) => Ok(serde_json::from_slice(payload)?),
            None => Err(KajiwotoError::Parse(
                "frame carries no payload".to_string(),
            )),
        }
    }

    /// Decode the body of an event frame into an RPC envelope.
    pub fn rpc_envelope(&self) -> Result<RpcEnvelope> {
        match &self.payload {
            Some(payload) => RpcEnvelope::from_slice(payload),
            None => Err(KajiwotoError::Parse(
                "frame carries no payload".to_string(),
            )),
        }
    }
}
