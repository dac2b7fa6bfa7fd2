use crate::error::Error;
use crate::models::user_info::{UserId, UserInfo};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

/// Derives an identity from the self-describing payload of an access token.
///
/// The payload segment is base64url-encoded JSON carrying issuer claims. The
/// id claim may be named `user_id` or `id` and may be a number or a numeric
/// string; anything that does not normalize to an integer makes the whole
/// token unusable, so no partial identity ever escapes this function.
pub fn decode_identity(token: &str) -> Result<UserInfo, Error> {
    let mut segments = token.split('.');
    let payload = segments
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(Error::InvalidTokenPayload)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| Error::InvalidTokenPayload)?;
    let claims: Value = serde_json::from_slice(&bytes).map_err(|_| Error::InvalidTokenPayload)?;

    let id = normalize_user_id(claims.get("user_id"))
        .or_else(|| normalize_user_id(claims.get("id")))
        .ok_or(Error::InvalidTokenPayload)?;
    let username = string_claim(&claims, "username")
        .or_else(|| string_claim(&claims, "name"))
        .unwrap_or_else(|| format!("User {id}"));
    let email = string_claim(&claims, "email").unwrap_or_default();

    Ok(UserInfo {
        id,
        username,
        email,
    })
}

fn normalize_user_id(value: Option<&Value>) -> Option<UserId> {
    match value? {
        Value::Number(number) => number.as_u64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

fn string_claim(claims: &Value, name: &str) -> Option<String> {
    claims
        .get(name)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
