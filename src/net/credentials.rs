//! Credential service contract consumed by the session store.
//!
//! DESIGN
//! ======
//! The store depends on this trait rather than on a concrete HTTP client so
//! tests and alternative backends can be injected. Everything runs on the
//! browser's single event loop, hence `?Send` futures and `Rc` listeners.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::rc::Rc;

use async_trait::async_trait;

use crate::state::session::Session;

/// Message shown for any failure that is not a credential rejection.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Failure reported by a credential service call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The service rejected the credentials or request (wrong password,
    /// duplicate email, weak password, ...).
    #[error("{0}")]
    Rejected(String),
    /// Network failure or unexpected HTTP status.
    #[error("transport error: {0}")]
    Transport(String),
    /// The service answered with a body we could not interpret.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The call did not complete before its deadline.
    #[error("timed out")]
    Timeout,
    /// No credential service is reachable in this environment.
    #[error("credential service not available")]
    Unavailable,
}

impl AuthError {
    /// Message suitable for an inline form alert.
    ///
    /// Rejections carry the service's own wording; everything else collapses
    /// into one "try again" message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Transport(_) | Self::Malformed(_) | Self::Timeout | Self::Unavailable => {
                UNEXPECTED_ERROR_MESSAGE.to_owned()
            }
        }
    }
}

/// Kind of session change carried by a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

impl AuthEvent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialSession => "INITIAL_SESSION",
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
        }
    }
}

/// Callback invoked for each session change notification.
pub type AuthListener = Rc<dyn Fn(AuthEvent, Option<&Session>)>;

/// Handle for a registered listener. Unsubscribes when dropped.
#[must_use = "dropping a subscription unsubscribes its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Remote identity service: credential checks, token issuance, and session
/// change notifications.
#[async_trait(?Send)]
pub trait CredentialService {
    /// Current session, if one is stored and still usable.
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Create an identity. `Ok(None)` means the account exists but must be
    /// confirmed before a session is issued.
    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<Option<Session>, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Register a change listener. Notifications are delivered in emission
    /// order until the returned handle is dropped.
    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription;
}
