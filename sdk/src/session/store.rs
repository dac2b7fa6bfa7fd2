use crate::models::user_info::UserInfo;
use crate::session::storage::SessionStorage;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::warn;

const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_INFO_KEY: &str = "user_info";

/// Sole owner of the session credentials. The access token lives in memory
/// only; the refresh token and the cached identity go through the durable
/// storage and survive process restarts.
#[derive(Debug)]
pub struct CredentialStore {
    access: RwLock<Option<String>>,
    storage: Arc<dyn SessionStorage>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            access: RwLock::new(None),
            storage,
        }
    }

    pub fn access(&self) -> Option<String> {
        self.access.read().clone()
    }

    pub fn set_access(&self, token: Option<String>) {
        *self.access.write() = token;
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)
    }

    pub fn set_refresh_token(&self, token: Option<String>) {
        match token {
            Some(token) => self.storage.set(REFRESH_TOKEN_KEY, &token),
            None => self.storage.delete(REFRESH_TOKEN_KEY),
        }
    }

    pub fn cached_identity(&self) -> Option<UserInfo> {
        let payload = self.storage.get(USER_INFO_KEY)?;
        match serde_json::from_str(&payload) {
            Ok(user) => Some(user),
            Err(error) => {
                warn!("Discarding unreadable cached identity: {error}");
                None
            }
        }
    }

    pub fn set_cached_identity(&self, user: Option<&UserInfo>) {
        match user {
            Some(user) => match serde_json::to_string(user) {
                Ok(payload) => self.storage.set(USER_INFO_KEY, &payload),
                Err(error) => warn!("Cannot serialize identity for caching: {error}"),
            },
            None => self.storage.delete(USER_INFO_KEY),
        }
    }

    pub fn clear_all(&self) {
        self.set_access(None);
        self.storage.delete(REFRESH_TOKEN_KEY);
        self.storage.delete(USER_INFO_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::InMemorySessionStorage;

    fn store() -> CredentialStore {
        CredentialStore::new(Arc::new(InMemorySessionStorage::new()))
    }

    #[test]
    fn should_clear_every_slot() {
        let store = store();
        store.set_access(Some("access".to_string()));
        store.set_refresh_token(Some("refresh".to_string()));
        store.set_cached_identity(Some(&UserInfo {
            id: 1,
            username: "ann".to_string(),
            email: String::new(),
        }));

        store.clear_all();

        assert!(store.access().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.cached_identity().is_none());
    }

    #[test]
    fn should_keep_durable_slots_across_stores() {
        let storage: Arc<dyn SessionStorage> = Arc::new(InMemorySessionStorage::new());
        let first = CredentialStore::new(storage.clone());
        first.set_access(Some("access".to_string()));
        first.set_refresh_token(Some("refresh".to_string()));

        let second = CredentialStore::new(storage);
        assert!(second.access().is_none());
        assert_eq!(second.refresh_token().as_deref(), Some("refresh"));
    }

    #[test]
    fn should_normalize_cached_identity_with_string_id() {
        let store = store();
        store
            .storage
            .set(USER_INFO_KEY, r#"{"id": "42", "username": "ann", "email": ""}"#);
        let user = store.cached_identity().unwrap();
        assert_eq!(user.id, 42);
    }

    #[test]
    fn should_discard_corrupt_cached_identity() {
        let store = store();
        store.storage.set(USER_INFO_KEY, "not json");
        assert!(store.cached_identity().is_none());
    }
}
