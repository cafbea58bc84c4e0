//! HTTP and persistence seams for the GoTrue client.
//!
//! Browser (csr): `BrowserTransport` posts via `gloo-net` and
//! `LocalStoragePersistence` keeps the token bundle in `localStorage`.
//! Elsewhere the transport fails with `AuthError::Unavailable` and the
//! persistence never holds a session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;

use super::credentials::AuthError;
use super::types::{error_body_message, is_rejection_status};
use crate::state::session::Session;
use crate::util::storage;

/// Map a non-2xx auth response into an error.
pub fn classify_failure(status: u16, body: &serde_json::Value) -> AuthError {
    let message = error_body_message(body);
    if is_rejection_status(status) {
        AuthError::Rejected(message.unwrap_or("Request was rejected").to_owned())
    } else {
        AuthError::Transport(match message {
            Some(m) => format!("{status}: {m}"),
            None => format!("unexpected status {status}"),
        })
    }
}

/// Sends auth API requests.
#[async_trait(?Send)]
pub trait AuthTransport {
    /// POST to `url` with an optional JSON `body`, returning the parsed JSON
    /// response (`Null` when empty).
    async fn post(
        &self,
        url: &str,
        body: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<serde_json::Value, AuthError>;
}

/// Where the current session's token bundle is kept between page loads.
pub trait SessionPersistence {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// `gloo-net` transport sending the project's `apikey` on every request.
#[derive(Debug, Clone)]
pub struct BrowserTransport {
    anon_key: String,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(anon_key: impl Into<String>) -> Self {
        Self {
            anon_key: anon_key.into(),
        }
    }
}

#[cfg(feature = "csr")]
fn transport_error(e: gloo_net::Error) -> AuthError {
    AuthError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl AuthTransport for BrowserTransport {
    async fn post(
        &self,
        url: &str,
        body: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<serde_json::Value, AuthError> {
        #[cfg(feature = "csr")]
        {
            let mut request = gloo_net::http::Request::post(url).header("apikey", &self.anon_key);
            if let Some(token) = bearer {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = match body {
                Some(body) => request.json(body).map_err(transport_error)?.send().await,
                None => request.send().await,
            }
            .map_err(transport_error)?;
            let status = resp.status();
            let ok = resp.ok();
            let text = resp.text().await.map_err(transport_error)?;
            let value = if text.trim().is_empty() {
                serde_json::Value::Null
            } else {
                match serde_json::from_str(&text) {
                    Ok(value) => value,
                    Err(e) if ok => return Err(AuthError::Malformed(e.to_string())),
                    Err(_) => serde_json::Value::Null,
                }
            };
            if ok { Ok(value) } else { Err(classify_failure(status, &value)) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.anon_key, url, body, bearer);
            Err(AuthError::Unavailable)
        }
    }
}

/// Session kept as JSON under one `localStorage` key.
#[derive(Debug, Clone)]
pub struct LocalStoragePersistence {
    key: String,
}

impl LocalStoragePersistence {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionPersistence for LocalStoragePersistence {
    fn load(&self) -> Option<Session> {
        storage::load_json(&self.key)
    }

    fn save(&self, session: &Session) {
        storage::save_json(&self.key, session);
    }

    fn clear(&self) {
        storage::remove(&self.key);
    }
}
