//! Message authentication token derived from the client clock.
//!
//! Every client→server RPC carries a trailing `{timestamp, secret}` pair.
//! The secret is the base64 of a decimal string obtained by multiplying the
//! millisecond epoch with a small factor read out of the epoch's own digits.
//! The backend recomputes the same value, so the derivation must be
//! reproduced exactly:
//!
//! 1. Take the epoch as a decimal string; let `d7` and `d8` be the digits
//!    at positions 7 and 8 (the 8th and 9th digits of a 13-digit epoch).
//! 2. The multiplier is `d7 * 10 + 1` when `d8` is odd, `d8 * 10 + 1`
//!    otherwise.
//! 3. `secret = base64(decimal(epoch * multiplier))`.
//!
//! The derivation is pure; [`message_secret`] feeds it the live wall clock.

use std::time::{SystemTime, UNIX_EPOCH};

use data_encoding::BASE64;

use crate::message::fields::Secret;

/// Build a secret for an outgoing RPC from the current wall clock.
pub fn message_secret() -> Secret {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    secret_from_millis(millis)
}

/// Derive the `{timestamp, secret}` pair from a millisecond epoch.
///
/// The formula is defined for 13-digit epochs; the multiply stays far below
/// `i64::MAX` for any epoch within the next several centuries.
pub fn secret_from_millis(millis: i64) -> Secret {
    let timestamp = millis.to_string();
    let digits = timestamp.as_bytes();
    let d7 = digit_at(digits, 7);
    let d8 = digit_at(digits, 8);

    let multiplier = if d8 % 2 == 1 { d7 * 10 + 1 } else { d8 * 10 + 1 };
    let secret = millis * multiplier;

    Secret {
        timestamp,
        secret: BASE64.encode(secret.to_string().as_bytes()),
    }
}

fn digit_at(digits: &[u8], index: usize) -> i64 {
    digits
        .get(index)
        .map_or(0, |b| i64::from(b.wrapping_sub(b'0')))
}
