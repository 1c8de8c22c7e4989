//! Bearer-token payload decoding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

/// Extract the user id from a bearer token.
///
/// Takes the payload segment of a `header.payload.signature` token,
/// base64url-decodes it, and reads the `user_id` claim, falling back to
/// `sub`. Fails closed: any malformed input logs and returns `None`, and
/// callers treat that as an anonymous session. No expiry check happens
/// here; the server is the authority on stale tokens.
pub fn user_id_from_token(token: &str) -> Option<String> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => {
            tracing::error!("bearer token has no payload segment");
            return None;
        }
    };

    // Some issuers pad; URL_SAFE_NO_PAD rejects '=', so trim it first.
    let raw = match URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::error!("bearer token payload is not base64url: {err}");
            return None;
        }
    };

    let claims: serde_json::Value = match serde_json::from_slice(&raw) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::error!("bearer token payload is not JSON: {err}");
            return None;
        }
    };

    for claim in ["user_id", "sub"] {
        if let Some(id) = claims.get(claim).and_then(|v| v.as_str()) {
            if !id.is_empty() {
                return Some(id.to_string());
            }
        }
    }
    tracing::error!("bearer token payload has no user_id or sub claim");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(claims: &str) -> String {
        let payload = URL_SAFE_NO_PAD.encode(claims.as_bytes());
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.c2ln")
    }

    #[test]
    fn test_reads_user_id_claim() {
        let token = token_with_payload(r#"{"user_id": "u-123", "exp": 1700000000}"#);
        assert_eq!(user_id_from_token(&token), Some("u-123".to_string()));
    }

    #[test]
    fn test_falls_back_to_sub() {
        let token = token_with_payload(r#"{"sub": "u-456"}"#);
        assert_eq!(user_id_from_token(&token), Some("u-456".to_string()));
    }

    #[test]
    fn test_user_id_wins_over_sub() {
        let token = token_with_payload(r#"{"sub": "other", "user_id": "u-789"}"#);
        assert_eq!(user_id_from_token(&token), Some("u-789".to_string()));
    }

    #[test]
    fn test_tolerates_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"user_id": "u-1"}"#);
        let token = format!("h.{payload}.s");
        assert_eq!(user_id_from_token(&token), Some("u-1".to_string()));
    }

    #[test]
    fn test_malformed_tokens_return_none() {
        assert_eq!(user_id_from_token(""), None);
        assert_eq!(user_id_from_token("no-dots-here"), None);
        assert_eq!(user_id_from_token("h..s"), None);
        assert_eq!(user_id_from_token("h.!!!not-base64!!!.s"), None);

        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"plain text"));
        assert_eq!(user_id_from_token(&not_json), None);
    }

    #[test]
    fn test_missing_or_non_string_claims_return_none() {
        let empty = token_with_payload(r#"{"exp": 1700000000}"#);
        assert_eq!(user_id_from_token(&empty), None);

        let numeric = token_with_payload(r#"{"sub": 42}"#);
        assert_eq!(user_id_from_token(&numeric), None);
    }
}
