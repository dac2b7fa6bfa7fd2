use crate::error::Error;
use crate::models::auth_tokens::AuthTokens;
use crate::models::user_info::UserInfo;
use crate::session::decoder::decode_identity;
use crate::session::refresher::{RefreshCoordinator, RefreshExchange};
use crate::session::storage::SessionStorage;
use crate::session::store::CredentialStore;
use parking_lot::RwLock;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub mod decoder;
pub mod refresher;
pub mod storage;
pub mod store;

/// Hooks the embedding application can install to react to session
/// lifecycle events, e.g. navigating to the login entry point.
pub trait SessionEvents: Send + Sync + Debug {
    fn on_logged_out(&self);
}

#[derive(Debug, Default)]
pub struct NoopSessionEvents;

impl SessionEvents for NoopSessionEvents {
    fn on_logged_out(&self) {}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Session restore is still running; protected calls should wait.
    Restoring,
    Authenticated(UserInfo),
    Anonymous,
}

/// Owns the credential store, the refresh coordinator and the exposed
/// session state. All mutation goes through this type; the invariants of the
/// refresh protocol are enforced here instead of by convention at call
/// sites.
#[derive(Debug)]
pub struct SessionManager {
    store: CredentialStore,
    coordinator: RefreshCoordinator,
    state: RwLock<SessionState>,
    events: RwLock<Arc<dyn SessionEvents>>,
}

impl SessionManager {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            store: CredentialStore::new(storage),
            coordinator: RefreshCoordinator::new(),
            state: RwLock::new(SessionState::Anonymous),
            events: RwLock::new(Arc::new(NoopSessionEvents)),
        }
    }

    pub fn set_events(&self, events: Arc<dyn SessionEvents>) {
        *self.events.write() = events;
    }

    fn events(&self) -> Arc<dyn SessionEvents> {
        self.events.read().clone()
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        match &*self.state.read() {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(&*self.state.read(), SessionState::Authenticated(_))
    }

    pub fn is_restoring(&self) -> bool {
        matches!(&*self.state.read(), SessionState::Restoring)
    }

    fn set_state(&self, state: SessionState) {
        *self.state.write() = state;
    }

    pub(crate) fn access_token(&self) -> Option<String> {
        self.store.access()
    }

    /// Reconciles whatever credentials survived the last process into a
    /// consistent identity, running at most one refresh exchange. This runs
    /// before any concurrent caller exists, so it talks to the exchange
    /// directly instead of going through the queue.
    pub async fn restore(&self, exchange: &dyn RefreshExchange) -> Option<UserInfo> {
        self.set_state(SessionState::Restoring);
        let cached = self.store.cached_identity();
        let mut access = self.store.access();

        if access.is_none() {
            if let Some(refresh_token) = self.store.refresh_token() {
                match exchange.refresh(&refresh_token).await {
                    Ok(tokens) => {
                        self.store.set_access(Some(tokens.access.clone()));
                        if let Some(rotated) = tokens.refresh {
                            self.store.set_refresh_token(Some(rotated));
                        }
                        access = Some(tokens.access);
                    }
                    Err(error) => {
                        warn!("Cannot refresh session during restore: {error}");
                        self.store.clear_all();
                        self.set_state(SessionState::Anonymous);
                        return None;
                    }
                }
            }
        }

        let user = match (cached, access) {
            (Some(user), Some(_)) => Some(user),
            (None, Some(token)) => match decode_identity(&token) {
                Ok(user) => {
                    self.store.set_cached_identity(Some(&user));
                    Some(user)
                }
                Err(error) => {
                    debug!("Discarding undecodable access token: {error}");
                    self.store.clear_all();
                    None
                }
            },
            _ => None,
        };

        match user {
            Some(user) => {
                info!(user_id = user.id, "Session restored");
                self.set_state(SessionState::Authenticated(user.clone()));
                Some(user)
            }
            None => {
                self.set_state(SessionState::Anonymous);
                None
            }
        }
    }

    /// Repairs the session after a 401, funneling every concurrent caller
    /// through the single-flight coordinator.
    pub(crate) async fn recover_unauthorized(
        &self,
        exchange: &dyn RefreshExchange,
    ) -> Result<(), Error> {
        let events = self.events();
        let result = self
            .coordinator
            .recover(&self.store, exchange, events.as_ref())
            .await;
        if let Err(Error::MissingRefreshToken | Error::RefreshFailed { .. }) = &result {
            self.set_state(SessionState::Anonymous);
        }
        result
    }

    /// Installs the token pair returned by the login exchange. The token
    /// payload is decoded before anything is stored, so a malformed token
    /// leaves the session untouched and logged out.
    pub(crate) fn install_login(
        &self,
        tokens: AuthTokens,
        submitted_username: &str,
    ) -> Result<UserInfo, Error> {
        let mut user = match decode_identity(&tokens.access) {
            Ok(user) => user,
            Err(error) => {
                self.store.clear_all();
                self.set_state(SessionState::Anonymous);
                return Err(error);
            }
        };
        if user.username.starts_with("User ") || user.username.is_empty() {
            user.username = submitted_username.to_string();
        }

        self.store.set_access(Some(tokens.access));
        self.store.set_refresh_token(Some(tokens.refresh));
        self.store.set_cached_identity(Some(&user));
        self.set_state(SessionState::Authenticated(user.clone()));
        info!(user_id = user.id, "Logged in");
        Ok(user)
    }

    /// Registration returns the created account without tokens; the identity
    /// is cached so the application can greet the user, but no credentials
    /// are minted until login.
    pub(crate) fn install_registered(&self, user: UserInfo) {
        self.store.set_cached_identity(Some(&user));
        self.set_state(SessionState::Authenticated(user));
    }

    pub fn logout(&self) {
        self.store.clear_all();
        self.set_state(SessionState::Anonymous);
        info!("Logged out");
    }
}
