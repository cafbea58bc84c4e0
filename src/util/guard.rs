//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical redirect behavior, so the decision
//! is a pure function of the session snapshot. Components re-run it on every
//! render; nothing is cached across state transitions.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

pub const ROOT_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/signin";
pub const SIGN_UP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What a guarded route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet; show the loading placeholder.
    Loading,
    /// Render the guarded content.
    Render,
    /// Navigate elsewhere.
    Redirect(&'static str),
}

/// Guard for authenticated-only content.
#[must_use]
pub fn protected_route(state: &SessionState) -> GuardDecision {
    match state {
        SessionState::Unknown => GuardDecision::Loading,
        SessionState::Absent => GuardDecision::Redirect(SIGN_IN_PATH),
        SessionState::Present(_) => GuardDecision::Render,
    }
}

/// Guard for `/`: always sends the user somewhere once resolved.
#[must_use]
pub fn root_redirect(state: &SessionState) -> GuardDecision {
    match state {
        SessionState::Unknown => GuardDecision::Loading,
        SessionState::Absent => GuardDecision::Redirect(SIGN_IN_PATH),
        SessionState::Present(_) => GuardDecision::Redirect(DASHBOARD_PATH),
    }
}

/// Guard for the sign-in and sign-up forms.
///
/// `Unknown` renders the form so the retry affordance stays reachable after
/// a failed initial fetch.
#[must_use]
pub fn guest_only(state: &SessionState) -> GuardDecision {
    match state {
        SessionState::Present(_) => GuardDecision::Redirect(DASHBOARD_PATH),
        SessionState::Unknown | SessionState::Absent => GuardDecision::Render,
    }
}
