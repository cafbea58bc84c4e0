use std::cell::Cell;

use super::*;

#[test]
fn rejected_error_keeps_service_message() {
    let err = AuthError::Rejected("Invalid login credentials".to_owned());
    assert_eq!(err.user_message(), "Invalid login credentials");
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[test]
fn non_rejection_errors_collapse_to_generic_message() {
    for err in [
        AuthError::Transport("connection reset".to_owned()),
        AuthError::Malformed("missing user".to_owned()),
        AuthError::Timeout,
        AuthError::Unavailable,
    ] {
        assert_eq!(err.user_message(), UNEXPECTED_ERROR_MESSAGE);
    }
}

#[test]
fn auth_event_names_match_wire_names() {
    assert_eq!(AuthEvent::SignedIn.as_str(), "SIGNED_IN");
    assert_eq!(AuthEvent::SignedOut.as_str(), "SIGNED_OUT");
    assert_eq!(AuthEvent::TokenRefreshed.as_str(), "TOKEN_REFRESHED");
    assert_eq!(AuthEvent::InitialSession.as_str(), "INITIAL_SESSION");
}

#[test]
fn subscription_cancels_on_drop() {
    let cancelled = Rc::new(Cell::new(0));
    let counter = cancelled.clone();
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    drop(sub);
    assert_eq!(cancelled.get(), 1);
}

#[test]
fn subscription_debug_reports_active() {
    let sub = Subscription::new(|| {});
    assert_eq!(format!("{sub:?}"), "Subscription { active: true }");
}
