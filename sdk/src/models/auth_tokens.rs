use serde::{Deserialize, Serialize};

/// Bearer token pair returned by the login exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

/// Result of a refresh exchange. The server rotates refresh tokens, so a new
/// refresh token may accompany the new access token and must replace the
/// stored one when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshedTokens {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}
