//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate sign-in
//! redirects and identity-dependent rendering. Readers always get a cloned
//! snapshot; only the session store writes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Proof of an authenticated identity plus its token bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Expiry in unix seconds, when the service reported one.
    pub expires_at: Option<i64>,
}

impl Session {
    /// Whether the access token has expired at `now_secs`.
    ///
    /// Sessions without expiry metadata never expire client-side.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_secs)
    }
}

/// Resolution state of the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Not yet resolved. Only ever held before the first resolution.
    #[default]
    Unknown,
    /// Resolved with no authenticated user.
    Absent,
    /// Resolved with an authenticated user.
    Present(Session),
}

impl SessionState {
    /// Build a resolved state from an optional session.
    #[must_use]
    pub fn resolved(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self::Present(session),
            None => Self::Absent,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Present(session) => Some(session),
            Self::Unknown | Self::Absent => None,
        }
    }

    /// Email of the signed-in user, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.session().map(|s| s.email.as_str())
    }

    /// Short label used in log lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Absent => "absent",
            Self::Present(_) => "present",
        }
    }
}
