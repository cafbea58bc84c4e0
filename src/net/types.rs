//! Wire DTOs for the auth (GoTrue) and data (PostgREST) APIs.
//!
//! DESIGN
//! ======
//! Response shapes are kept separate from `state::session::Session` so the
//! rest of the client never sees optional wire fields it does not use.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::Session;

/// User object embedded in GoTrue responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Token response from `/auth/v1/token` and, when a session is issued
/// immediately, from `/auth/v1/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl TokenResponse {
    /// Convert into a client session. `now_secs` backs `expires_at` when the
    /// service only reported `expires_in`.
    #[must_use]
    pub fn into_session(self, now_secs: i64) -> Session {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_secs + secs));
        Session {
            user_id: self.user.id,
            email: self.user.email.unwrap_or_default(),
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
        }
    }
}

/// Interpret a sign-up response body.
///
/// With email confirmation enabled the service returns the bare user and no
/// tokens; that maps to `Ok(None)`.
///
/// # Errors
///
/// Returns an error string if the body is neither a token response nor a
/// user object.
pub fn parse_sign_up_body(body: &serde_json::Value, now_secs: i64) -> Result<Option<Session>, String> {
    if body.get("access_token").is_some() {
        let tokens: TokenResponse = serde_json::from_value(body.clone()).map_err(|e| e.to_string())?;
        return Ok(Some(tokens.into_session(now_secs)));
    }
    let user = body.get("user").unwrap_or(body);
    serde_json::from_value::<AuthUser>(user.clone())
        .map(|_| None)
        .map_err(|e| e.to_string())
}

/// Extract a human-readable message from an auth or data API error body.
///
/// GoTrue versions disagree on the field name, so the first present of
/// `msg`, `error_description`, `message`, `error` wins.
#[must_use]
pub fn error_body_message(body: &serde_json::Value) -> Option<&str> {
    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(serde_json::Value::as_str))
        .filter(|m| !m.trim().is_empty())
}

/// Whether an HTTP status from the auth API is a credential rejection as
/// opposed to a transport-level failure.
#[must_use]
pub fn is_rejection_status(status: u16) -> bool {
    matches!(status, 400 | 401 | 403 | 422)
}

/// Aggregated deal total for one sales rep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    #[serde(default)]
    pub sum: f64,
}

/// Deal row posted by the add-deal form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewDeal {
    pub name: String,
    pub value: f64,
}
