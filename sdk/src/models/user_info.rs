use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

pub type UserId = u64;

/// `UserInfo` is the identity record exposed by the session and embedded in
/// owner/participant payloads. The `id` accepts both a JSON number and a
/// numeric string, because some token issuers and cached payloads deliver it
/// as a string; ownership checks elsewhere rely on it being numeric.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
}
