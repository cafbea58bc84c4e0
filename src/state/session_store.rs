//! Session store: the single owner of the current session state.
//!
//! ARCHITECTURE
//! ============
//! State is written from exactly two places: the change-notification listener
//! (every notification overwrites, last write wins) and the initial fetch,
//! which only applies when no notification arrived while it was in flight.
//! `sign_in`/`sign_up`/`sign_out` report their own call's outcome and never
//! touch state; the service's notification carries the change.
//!
//! TRADE-OFFS
//! ==========
//! A failed or timed-out initial fetch resolves to `Absent` instead of
//! leaving the app on a loading screen forever. The error is kept in
//! `init_error` so the sign-in page can offer a retry.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::{self, Either};

use super::session::{Session, SessionState};
use crate::net::credentials::{AuthError, AuthEvent, CredentialService, Subscription};

/// Uniform result of a sign-in, sign-up, or sign-out call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub session: Option<Session>,
    pub error: Option<String>,
}

impl AuthOutcome {
    fn succeeded(session: Option<Session>) -> Self {
        Self {
            success: true,
            session,
            error: None,
        }
    }

    fn failed(err: &AuthError) -> Self {
        Self {
            success: false,
            session: None,
            error: Some(err.user_message()),
        }
    }

    /// Collapse into a `Result` for form actions.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message when the call failed.
    pub fn into_result(self) -> Result<Option<Session>, String> {
        if self.success {
            Ok(self.session)
        } else {
            Err(self.error.unwrap_or_else(|| AuthError::Unavailable.user_message()))
        }
    }
}

/// Canonical form of an email address for credential calls.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

type Publish = Rc<dyn Fn(&SessionState)>;

struct Inner {
    state: RefCell<SessionState>,
    /// Count of notifications applied so far.
    notifications: Cell<u64>,
    init_error: RefCell<Option<String>>,
    subscription: RefCell<Option<Subscription>>,
    publish: Publish,
}

impl Inner {
    fn apply(&self, next: SessionState) {
        self.state.replace(next.clone());
        (self.publish)(&next);
    }
}

/// Owner of the session lifecycle. Cheap to clone; clones share state.
///
/// Dropping the last clone drops the change subscription, after which late
/// notifications are discarded.
#[derive(Clone)]
pub struct SessionStore {
    service: Rc<dyn CredentialService>,
    inner: Rc<Inner>,
}

impl SessionStore {
    /// Create a store in the `Unknown` state. `publish` receives every state
    /// the store applies, in order.
    pub fn new(service: Rc<dyn CredentialService>, publish: impl Fn(&SessionState) + 'static) -> Self {
        Self {
            service,
            inner: Rc::new(Inner {
                state: RefCell::new(SessionState::Unknown),
                notifications: Cell::new(0),
                init_error: RefCell::new(None),
                subscription: RefCell::new(None),
                publish: Rc::new(publish),
            }),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// User-facing message from the last failed initial fetch.
    #[must_use]
    pub fn init_error(&self) -> Option<String> {
        self.inner.init_error.borrow().clone()
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.inner.subscription.borrow().is_some()
    }

    /// Register the store's change listener. Only the first call subscribes.
    pub fn subscribe_to_changes(&self) {
        if self.is_subscribed() {
            leptos::logging::warn!("session store already subscribed to changes");
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let subscription = self.service.on_auth_state_change(Rc::new(move |event: AuthEvent, session: Option<&Session>| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            leptos::logging::log!(
                "session changed: {} user={}",
                event.as_str(),
                session.map_or("-", |s| s.user_id.as_str())
            );
            inner.notifications.set(inner.notifications.get() + 1);
            inner.apply(SessionState::resolved(session.cloned()));
        }));
        self.inner.subscription.replace(Some(subscription));
    }

    /// Fetch the current session once, with no deadline.
    pub async fn initialize(&self) {
        self.initialize_within(future::pending::<()>()).await;
    }

    /// Fetch the current session once, giving up when `deadline` completes.
    pub async fn initialize_within<D>(&self, deadline: D)
    where
        D: Future<Output = ()>,
    {
        let seen = self.inner.notifications.get();
        let fetch = self.service.get_session();
        let deadline = Box::pin(deadline);
        let result = match future::select(fetch, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(AuthError::Timeout),
        };

        if let Err(e) = &result {
            leptos::logging::error!("error getting session: {e}");
        }

        // A notification already resolved the state, so the fetch outcome
        // (including any failure) is stale.
        if self.inner.notifications.get() != seen {
            leptos::logging::log!("session already resolved by a change notification; fetch result dropped");
            self.inner.init_error.replace(None);
            return;
        }

        let next = match result {
            Ok(session) => {
                self.inner.init_error.replace(None);
                SessionState::resolved(session)
            }
            Err(e) => {
                self.inner.init_error.replace(Some(e.user_message()));
                SessionState::Absent
            }
        };
        self.inner.apply(next);
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthOutcome {
        let email = normalize_email(email);
        match self.service.sign_in_with_password(&email, password).await {
            Ok(session) => AuthOutcome::succeeded(Some(session)),
            Err(e) => {
                report_failure("sign-in", &e);
                AuthOutcome::failed(&e)
            }
        }
    }

    /// Create an account. The outcome has no session when the service
    /// requires email confirmation first.
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthOutcome {
        let email = normalize_email(email);
        match self.service.sign_up_with_password(&email, password).await {
            Ok(session) => AuthOutcome::succeeded(session),
            Err(e) => {
                report_failure("sign-up", &e);
                AuthOutcome::failed(&e)
            }
        }
    }

    pub async fn sign_out(&self) -> AuthOutcome {
        match self.service.sign_out().await {
            Ok(()) => AuthOutcome::succeeded(None),
            Err(e) => {
                report_failure("sign-out", &e);
                AuthOutcome::failed(&e)
            }
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.inner.state.borrow().label())
            .field("subscribed", &self.is_subscribed())
            .finish_non_exhaustive()
    }
}

fn report_failure(action: &str, err: &AuthError) {
    match err {
        AuthError::Rejected(reason) => leptos::logging::log!("{action} rejected: {reason}"),
        _ => leptos::logging::error!("unexpected error during {action}: {err}"),
    }
}
