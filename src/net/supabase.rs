//! GoTrue-backed credential service.
//!
//! HTTP and session persistence go through `transport::AuthTransport` and
//! `transport::SessionPersistence`; `SupabaseAuth::new` wires the browser
//! implementations.
//!
//! NOTIFICATIONS
//! =============
//! The first successful `get_session` emits `InitialSession`. Successful
//! sign-in, sign-up (with session), refresh, and sign-out emit a change
//! notification *before* the call returns, so listeners observe the new
//! session no later than the caller does.

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;

use super::credentials::{AuthError, AuthEvent, AuthListener, CredentialService, Subscription};
use super::listeners::ListenerRegistry;
use super::transport::{AuthTransport, BrowserTransport, LocalStoragePersistence, SessionPersistence};
use super::types::{TokenResponse, parse_sign_up_body};
use crate::config::ServiceConfig;
use crate::state::session::Session;
use crate::util::storage;

fn auth_endpoint(base: &str, path: &str) -> String {
    format!("{base}/auth/v1/{path}")
}

/// Credential service speaking the Supabase auth REST API.
pub struct SupabaseAuth {
    base_url: String,
    transport: Rc<dyn AuthTransport>,
    persistence: Rc<dyn SessionPersistence>,
    listeners: ListenerRegistry,
    initial_emitted: Cell<bool>,
}

impl SupabaseAuth {
    /// Browser client: `gloo-net` requests, session in `localStorage`.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        let transport = BrowserTransport::new(config.anon_key.clone());
        let persistence = LocalStoragePersistence::new(config.session_storage_key());
        Self::with_parts(&config, Rc::new(transport), Rc::new(persistence))
    }

    #[must_use]
    pub fn with_parts(
        config: &ServiceConfig,
        transport: Rc<dyn AuthTransport>,
        persistence: Rc<dyn SessionPersistence>,
    ) -> Self {
        Self {
            base_url: config.url.clone(),
            transport,
            persistence,
            listeners: ListenerRegistry::new(),
            initial_emitted: Cell::new(false),
        }
    }

    fn store_and_notify(&self, event: AuthEvent, session: &Session) {
        self.persistence.save(session);
        self.listeners.emit(event, Some(session));
    }

    fn clear_and_notify(&self) {
        self.persistence.clear();
        self.listeners.emit(AuthEvent::SignedOut, None);
    }

    async fn token_request(&self, grant_type: &str, body: serde_json::Value) -> Result<Session, AuthError> {
        let url = auth_endpoint(&self.base_url, &format!("token?grant_type={grant_type}"));
        let value = self.transport.post(&url, Some(&body), None).await?;
        let tokens: TokenResponse =
            serde_json::from_value(value).map_err(|e| AuthError::Malformed(e.to_string()))?;
        Ok(tokens.into_session(storage::now_secs()))
    }

    /// Stored session, refreshed first when its access token has expired.
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.persistence.load() else {
            return Ok(None);
        };
        if !session.is_expired(storage::now_secs()) {
            return Ok(Some(session));
        }

        let Some(refresh_token) = session.refresh_token.as_deref() else {
            self.persistence.clear();
            return Ok(None);
        };
        let refreshed = self
            .token_request("refresh_token", serde_json::json!({ "refresh_token": refresh_token }))
            .await;
        match refreshed {
            Ok(fresh) => {
                leptos::logging::log!("session refreshed for user {}", fresh.user_id);
                self.store_and_notify(AuthEvent::TokenRefreshed, &fresh);
                Ok(Some(fresh))
            }
            Err(AuthError::Rejected(reason)) => {
                leptos::logging::warn!("stored session could not be refreshed: {reason}");
                self.persistence.clear();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for SupabaseAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseAuth")
            .field("base_url", &self.base_url)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[async_trait(?Send)]
impl CredentialService for SupabaseAuth {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let session = self.current_session().await?;
        if !self.initial_emitted.replace(true) {
            self.listeners.emit(AuthEvent::InitialSession, session.as_ref());
        }
        Ok(session)
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self
            .token_request("password", serde_json::json!({ "email": email, "password": password }))
            .await?;
        self.store_and_notify(AuthEvent::SignedIn, &session);
        Ok(session)
    }

    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<Option<Session>, AuthError> {
        let url = auth_endpoint(&self.base_url, "signup");
        let body = serde_json::json!({ "email": email, "password": password });
        let value = self.transport.post(&url, Some(&body), None).await?;
        let session = parse_sign_up_body(&value, storage::now_secs()).map_err(AuthError::Malformed)?;
        if let Some(session) = &session {
            self.store_and_notify(AuthEvent::SignedIn, session);
        }
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(session) = self.persistence.load() {
            let url = auth_endpoint(&self.base_url, "logout");
            match self.transport.post(&url, None, Some(&session.access_token)).await {
                Ok(_) => {}
                // The token is already invalid server-side; dropping it locally
                // completes the sign-out.
                Err(AuthError::Rejected(reason)) => {
                    leptos::logging::warn!("logout rejected, clearing local session: {reason}");
                }
                Err(e) => return Err(e),
            }
        }
        self.clear_and_notify();
        Ok(())
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}
