use std::str::FromStr;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

/// The payload claims of a bearer token issued by the identity realm.
///
/// Only the claims this SDK consumes are modeled; any other payload field is ignored during
/// deserialization. Signature validation is the server's concern and is intentionally not
/// performed here.
#[derive(Debug, Deserialize)]
pub struct JwtToken {
    /// The subject claim, used as the platform user identifier.
    pub sub: String,
    #[allow(missing_docs)]
    pub email: Option<String>,
    #[allow(missing_docs)]
    pub preferred_username: Option<String>,
}

/// Errors from decoding a bearer token payload.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
pub enum JwtTokenParseError {
    #[error("JWT token has an invalid number of parts")]
    InvalidParts,
    #[error(transparent)]
    InvalidBase64(#[from] base64::DecodeError),
    #[error(transparent)]
    InvalidJson(#[from] serde_json::Error),
}

impl FromStr for JwtToken {
    type Err = JwtTokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(JwtTokenParseError::InvalidParts);
        }

        let decoded = URL_SAFE_NO_PAD.decode(parts[1])?;
        Ok(serde_json::from_slice(&decoded)?)
    }
}
