use futures::executor::block_on;
use serde_json::json;

use super::*;

#[test]
fn classify_failure_rejection_uses_body_message() {
    let body = json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" });
    assert_eq!(
        classify_failure(400, &body),
        AuthError::Rejected("Invalid login credentials".to_owned())
    );
    assert_eq!(
        classify_failure(422, &json!({ "msg": "User already registered" })),
        AuthError::Rejected("User already registered".to_owned())
    );
}

#[test]
fn classify_failure_rejection_without_message_has_fallback() {
    assert_eq!(
        classify_failure(401, &serde_json::Value::Null),
        AuthError::Rejected("Request was rejected".to_owned())
    );
}

#[test]
fn classify_failure_server_errors_are_transport() {
    assert_eq!(
        classify_failure(503, &serde_json::Value::Null),
        AuthError::Transport("unexpected status 503".to_owned())
    );
    assert_eq!(
        classify_failure(500, &json!({ "message": "boom" })),
        AuthError::Transport("500: boom".to_owned())
    );
}

#[test]
fn browser_transport_outside_browser_is_unavailable() {
    let transport = BrowserTransport::new("anon");
    let result = block_on(transport.post("http://localhost:54321/auth/v1/logout", None, Some("at")));
    assert_eq!(result, Err(AuthError::Unavailable));
}

#[test]
fn local_storage_persistence_outside_browser_holds_nothing() {
    let persistence = LocalStoragePersistence::new("sb-localhost-auth-token");
    persistence.save(&Session {
        user_id: "u-1".to_owned(),
        email: "u-1@example.com".to_owned(),
        access_token: "at".to_owned(),
        refresh_token: None,
        expires_at: None,
    });
    assert_eq!(persistence.load(), None);
    persistence.clear();
}
