use crate::error::Error;
use crate::models::auth_tokens::RefreshedTokens;
use crate::session::store::CredentialStore;
use crate::session::SessionEvents;
use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// The refresh exchange itself, kept behind a trait so the coordinator never
/// depends on the transport. The HTTP client implements it with a plain POST
/// that bypasses the 401 recovery path.
#[async_trait]
pub trait RefreshExchange: Send + Sync {
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, Error>;
}

/// Outcome shared by every caller that waited on a failed exchange. Transport
/// errors and explicit rejection collapse into this one kind; the retry
/// middleware below the exchange already gives transient transport errors a
/// bounded retry.
#[derive(Debug, Clone)]
pub struct RefreshFailure {
    pub status: Option<u16>,
    pub reason: String,
}

impl RefreshFailure {
    fn from_error(error: &Error) -> Self {
        match error {
            Error::HttpResponseError(status, body) => RefreshFailure {
                status: Some(*status),
                reason: body.clone(),
            },
            other => RefreshFailure {
                status: None,
                reason: other.to_string(),
            },
        }
    }
}

impl From<RefreshFailure> for Error {
    fn from(failure: RefreshFailure) -> Self {
        Error::RefreshFailed {
            status: failure.status,
            reason: failure.reason,
        }
    }
}

#[derive(Debug, PartialEq)]
enum RefreshState {
    Idle,
    Refreshing,
}

#[derive(Debug)]
struct RefreshSlot {
    state: RefreshState,
    waiters: Vec<oneshot::Sender<Result<(), RefreshFailure>>>,
}

/// Single-flight coordinator for the refresh exchange.
///
/// At most one exchange is in flight at any time. Callers that hit a 401
/// while an exchange is running are parked on a oneshot channel and released
/// together with the originating caller, on the same outcome. The slot lock
/// is never held across an await, so every state transition is atomic with
/// respect to the next suspension point.
#[derive(Debug)]
pub struct RefreshCoordinator {
    slot: Mutex<RefreshSlot>,
}

enum Entry {
    Originator(String),
    Waiter(oneshot::Receiver<Result<(), RefreshFailure>>),
    NoCredential,
}

impl Default for RefreshCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(RefreshSlot {
                state: RefreshState::Idle,
                waiters: Vec::new(),
            }),
        }
    }

    /// Repairs an expired session after a request failed with 401.
    ///
    /// Returns `Ok(())` when a new access token is installed and the caller
    /// may replay its request. Any error means the caller must fail: the
    /// session has been torn down and the logged-out hook fired exactly once.
    pub async fn recover(
        &self,
        store: &CredentialStore,
        exchange: &dyn RefreshExchange,
        events: &dyn SessionEvents,
    ) -> Result<(), Error> {
        let entry = {
            let mut slot = self.slot.lock();
            match slot.state {
                RefreshState::Refreshing => {
                    let (sender, receiver) = oneshot::channel();
                    slot.waiters.push(sender);
                    Entry::Waiter(receiver)
                }
                RefreshState::Idle => match store.refresh_token() {
                    Some(refresh_token) => {
                        slot.state = RefreshState::Refreshing;
                        Entry::Originator(refresh_token)
                    }
                    None => Entry::NoCredential,
                },
            }
        };

        match entry {
            Entry::Waiter(receiver) => match receiver.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(failure)) => Err(failure.into()),
                // The sender only disappears if the coordinator is dropped
                // mid-exchange; surface it as a failed refresh.
                Err(_) => Err(Error::RefreshFailed {
                    status: None,
                    reason: "refresh interrupted".to_string(),
                }),
            },
            Entry::NoCredential => {
                store.clear_all();
                events.on_logged_out();
                Err(Error::MissingRefreshToken)
            }
            Entry::Originator(refresh_token) => {
                debug!("Access token rejected, refreshing session");
                match exchange.refresh(&refresh_token).await {
                    Ok(tokens) => {
                        store.set_access(Some(tokens.access));
                        if let Some(rotated) = tokens.refresh {
                            store.set_refresh_token(Some(rotated));
                        }
                        self.finish(Ok(()));
                        Ok(())
                    }
                    Err(error) => {
                        warn!("Refresh token exchange failed: {error}");
                        let failure = RefreshFailure::from_error(&error);
                        store.clear_all();
                        self.finish(Err(failure.clone()));
                        events.on_logged_out();
                        Err(failure.into())
                    }
                }
            }
        }
    }

    /// Drains the queue and returns to idle in one critical section, so a
    /// new wave of 401s can never interleave with stale waiters.
    fn finish(&self, outcome: Result<(), RefreshFailure>) {
        let waiters = {
            let mut slot = self.slot.lock();
            slot.state = RefreshState::Idle;
            std::mem::take(&mut slot.waiters)
        };
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::InMemorySessionStorage;
    use crate::session::NoopSessionEvents;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio::sync::Semaphore;

    #[derive(Debug)]
    struct StubExchange {
        calls: AtomicU32,
        gate: Semaphore,
        fail: bool,
    }

    impl StubExchange {
        fn open() -> Self {
            Self {
                calls: AtomicU32::new(0),
                gate: Semaphore::new(1),
                fail: false,
            }
        }

        fn gated() -> Self {
            Self {
                calls: AtomicU32::new(0),
                gate: Semaphore::new(0),
                fail: false,
            }
        }
    }

    #[async_trait]
    impl RefreshExchange for StubExchange {
        async fn refresh(&self, _refresh_token: &str) -> Result<RefreshedTokens, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let _permit = self.gate.acquire().await;
            if self.fail {
                return Err(Error::HttpResponseError(401, "token invalid".to_string()));
            }
            Ok(RefreshedTokens {
                access: "new-access".to_string(),
                refresh: Some("rotated-refresh".to_string()),
            })
        }
    }

    #[derive(Debug, Default)]
    struct CountingEvents {
        logged_out: AtomicU32,
    }

    impl SessionEvents for CountingEvents {
        fn on_logged_out(&self) {
            self.logged_out.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn store_with_tokens() -> CredentialStore {
        let store = CredentialStore::new(Arc::new(InMemorySessionStorage::new()));
        store.set_access(Some("stale-access".to_string()));
        store.set_refresh_token(Some("refresh".to_string()));
        store
    }

    #[tokio::test]
    async fn should_perform_single_exchange_for_concurrent_callers() {
        let coordinator = RefreshCoordinator::new();
        let store = store_with_tokens();
        let exchange = StubExchange::gated();
        let events = NoopSessionEvents;

        // The first caller starts the exchange and parks on the gate; the
        // other two must enqueue instead of starting their own exchange.
        let open_gate = async {
            exchange.gate.add_permits(1);
        };
        let (first, second, third, ()) = tokio::join!(
            coordinator.recover(&store, &exchange, &events),
            coordinator.recover(&store, &exchange, &events),
            coordinator.recover(&store, &exchange, &events),
            open_gate,
        );

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert!(third.is_ok());
        assert_eq!(exchange.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.access().as_deref(), Some("new-access"));
        assert_eq!(store.refresh_token().as_deref(), Some("rotated-refresh"));
    }

    #[tokio::test]
    async fn should_fail_all_queued_callers_together() {
        let coordinator = RefreshCoordinator::new();
        let store = store_with_tokens();
        let exchange = StubExchange {
            calls: AtomicU32::new(0),
            gate: Semaphore::new(0),
            fail: true,
        };
        let events = CountingEvents::default();

        let open_gate = async {
            exchange.gate.add_permits(1);
        };
        let (first, second, third, ()) = tokio::join!(
            coordinator.recover(&store, &exchange, &events),
            coordinator.recover(&store, &exchange, &events),
            coordinator.recover(&store, &exchange, &events),
            open_gate,
        );

        for outcome in [first, second, third] {
            assert!(matches!(
                outcome,
                Err(Error::RefreshFailed {
                    status: Some(401),
                    ..
                })
            ));
        }
        assert_eq!(exchange.calls.load(Ordering::SeqCst), 1);
        assert_eq!(events.logged_out.load(Ordering::SeqCst), 1);
        assert!(store.access().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[tokio::test]
    async fn should_fail_fast_without_refresh_token() {
        let coordinator = RefreshCoordinator::new();
        let store = CredentialStore::new(Arc::new(InMemorySessionStorage::new()));
        store.set_access(Some("stale-access".to_string()));
        let exchange = StubExchange::open();
        let events = CountingEvents::default();

        let outcome = coordinator.recover(&store, &exchange, &events).await;

        assert!(matches!(outcome, Err(Error::MissingRefreshToken)));
        assert_eq!(exchange.calls.load(Ordering::SeqCst), 0);
        assert_eq!(events.logged_out.load(Ordering::SeqCst), 1);
        assert!(store.access().is_none());
    }

    #[tokio::test]
    async fn should_return_to_idle_after_each_wave() {
        let coordinator = RefreshCoordinator::new();
        let store = store_with_tokens();
        let exchange = StubExchange::open();
        let events = NoopSessionEvents;

        coordinator
            .recover(&store, &exchange, &events)
            .await
            .unwrap();
        coordinator
            .recover(&store, &exchange, &events)
            .await
            .unwrap();

        assert_eq!(exchange.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn should_install_new_access_token_before_releasing_waiters() {
        let coordinator = RefreshCoordinator::new();
        let store = store_with_tokens();
        let exchange = StubExchange::gated();
        let events = NoopSessionEvents;

        let waiter = async {
            let outcome = coordinator.recover(&store, &exchange, &events).await;
            // A released waiter replays its request with whatever the store
            // holds now, so the new token must already be installed.
            (outcome, store.access())
        };
        let open_gate = async {
            exchange.gate.add_permits(1);
        };
        let (originator, (waited, seen_access), ()) = tokio::join!(
            coordinator.recover(&store, &exchange, &events),
            waiter,
            open_gate,
        );

        assert!(originator.is_ok());
        assert!(waited.is_ok());
        assert_eq!(seen_access.as_deref(), Some("new-access"));
    }
}
