//! # Bearer token claims
//!
//! The login endpoint returns a JWT. The client never verifies it (it has no
//! key); it only reads the payload to learn the user's role.
//!
//! A token is `header.payload.signature`. The payload segment is JSON encoded
//! with base64. JWTs use the url-safe alphabet without padding, but the
//! standard alphabet and padded input are accepted too.
//!
//! [`user_roles`] is the best-effort entry point: any failure (no token, wrong
//! shape, bad base64, bad JSON, missing role) yields an empty list.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("token must have three segments, found {0}")]
    Segments(usize),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// The parts of the token payload the UI cares about.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Everything else in the payload (`user_id`, `exp`, ...).
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Claims {
    /// Expiry as seconds since the epoch, when the payload carries one.
    pub fn expires_at(&self) -> Option<u64> {
        self.other.get("exp")?.as_u64()
    }
}

/// Decode the payload segment of a three-part token.
pub fn decode_claims(token: &str) -> Result<Claims, ClaimsError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(ClaimsError::Segments(segments.len()));
    }

    let payload = segments[1].replace('+', "-").replace('/', "_");
    let bytes = PAYLOAD_ENGINE.decode(payload.as_bytes())?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Roles carried by the token; empty on any failure.
pub fn user_roles(token: Option<&str>) -> Vec<String> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    match decode_claims(token) {
        Ok(claims) => claims.role.into_iter().collect(),
        Err(e) => {
            tracing::debug!("Ignoring undecodable token: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

    fn token_with(payload: &str, engine: &impl Engine) -> String {
        format!("header.{}.sig", engine.encode(payload))
    }

    #[test]
    fn test_no_token_has_no_roles() {
        assert!(user_roles(None).is_empty());
        assert!(user_roles(Some("")).is_empty());
    }

    #[test]
    fn test_decodes_role_from_payload() {
        let token = token_with(r#"{"role":"Admin"}"#, &STANDARD);
        assert_eq!(user_roles(Some(&token)), vec!["Admin".to_string()]);
    }

    #[test]
    fn test_decodes_url_safe_unpadded_payload() {
        // "?>" encodes to a '-' in this payload.
        let payload = r#"{"role":"Architect","username":"a??>>"}"#;
        let token = token_with(payload, &URL_SAFE_NO_PAD);

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role.as_deref(), Some("Architect"));
        assert_eq!(claims.username.as_deref(), Some("a??>>"));
    }

    #[test]
    fn test_two_segments_is_invalid() {
        assert!(matches!(
            decode_claims("invalid.token"),
            Err(ClaimsError::Segments(2))
        ));
        assert!(user_roles(Some("invalid.token")).is_empty());
    }

    #[test]
    fn test_bad_base64_is_invalid() {
        assert!(matches!(
            decode_claims("a.!!!.c"),
            Err(ClaimsError::Base64(_))
        ));
    }

    #[test]
    fn test_non_json_payload_has_no_roles() {
        let token = token_with("not json", &STANDARD);
        assert!(matches!(decode_claims(&token), Err(ClaimsError::Json(_))));
        assert!(user_roles(Some(&token)).is_empty());
    }

    #[test]
    fn test_payload_without_role_has_no_roles() {
        let token = token_with(r#"{"user_id":7,"exp":1700000000}"#, &STANDARD);
        assert!(user_roles(Some(&token)).is_empty());

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.expires_at(), Some(1_700_000_000));
        assert_eq!(claims.other.get("user_id"), Some(&serde_json::json!(7)));
    }
}
