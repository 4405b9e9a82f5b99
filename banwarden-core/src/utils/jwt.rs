//! JWT payload decoding
//!
//! Only the payload segment is read. The signature is verified by the
//! backend on every authenticated request, never locally.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::{CoreError, CoreResult};
use crate::types::Claims;

/// Decode the claims of a compact JWT (`header.payload.signature`).
pub(crate) fn decode_claims(token: &str) -> CoreResult<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if segments.next().is_none() => payload,
        _ => return Err(CoreError::InvalidToken("malformed token".to_string())),
    };

    // Some encoders keep the padding
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| CoreError::InvalidToken(format!("payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| CoreError::InvalidToken(format!("payload is not valid claims: {e}")))
}

/// Whether `claims` are expired at `now` (seconds since the Unix epoch).
pub(crate) fn is_expired(claims: &Claims, now: u64) -> bool {
    claims.exp.is_some_and(|exp| exp <= now)
}

#[cfg(test)]
pub(crate) fn encode_for_test(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}
