use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token does not have a payload segment")]
    Malformed,
    #[error("token payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a valid claims object: {0}")]
    Claims(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Claims {
    username: String,
}

/// Reads the username claim out of a session token without a server round
/// trip. The token is a JWT; only the middle (payload) segment matters here
/// and the signature is the server's problem.
pub fn decode_username(token: &str) -> Result<String, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::Malformed)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let claims: Claims = serde_json::from_slice(&bytes)?;
    Ok(claims.username)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json);
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_username_claim() {
        let token = token_with_payload(r#"{"username":"testuser","isAdmin":false,"iat":1598159259}"#);
        assert_eq!(decode_username(&token).unwrap(), "testuser");
    }

    #[test]
    fn tolerates_base64_padding() {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"username":"padded"}"#);
        let token = format!("{header}.{payload}.sig");
        assert_eq!(decode_username(&token).unwrap(), "padded");
    }

    #[test]
    fn rejects_token_without_payload_segment() {
        assert!(matches!(decode_username("not-a-jwt"), Err(TokenError::Malformed)));
    }

    #[test]
    fn rejects_garbage_payload() {
        let token = format!("header.{}.sig", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(decode_username(&token), Err(TokenError::Claims(_))));
    }

    #[test]
    fn rejects_claims_without_username() {
        let token = token_with_payload(r#"{"userId":12}"#);
        assert!(decode_username(&token).is_err());
    }
}
