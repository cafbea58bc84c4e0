use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn session(id: &str) -> Session {
    Session {
        user_id: id.to_owned(),
        email: format!("{id}@example.com"),
        access_token: "at".to_owned(),
        refresh_token: None,
        expires_at: None,
    }
}

fn recorder(log: &Rc<RefCell<Vec<(AuthEvent, Option<String>)>>>) -> AuthListener {
    let log = log.clone();
    Rc::new(move |event: AuthEvent, session: Option<&Session>| {
        log.borrow_mut().push((event, session.map(|s| s.user_id.clone())));
    })
}

#[test]
fn emit_delivers_in_order() {
    let registry = ListenerRegistry::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let _sub = registry.subscribe(recorder(&log));

    registry.emit(AuthEvent::SignedIn, Some(&session("a")));
    registry.emit(AuthEvent::TokenRefreshed, Some(&session("a")));
    registry.emit(AuthEvent::SignedOut, None);

    assert_eq!(
        *log.borrow(),
        vec![
            (AuthEvent::SignedIn, Some("a".to_owned())),
            (AuthEvent::TokenRefreshed, Some("a".to_owned())),
            (AuthEvent::SignedOut, None),
        ]
    );
}

#[test]
fn dropped_subscription_stops_delivery() {
    let registry = ListenerRegistry::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sub = registry.subscribe(recorder(&log));
    assert_eq!(registry.len(), 1);

    drop(sub);
    registry.emit(AuthEvent::SignedOut, None);

    assert!(registry.is_empty());
    assert!(log.borrow().is_empty());
}

#[test]
fn unsubscribe_only_removes_its_own_listener() {
    let registry = ListenerRegistry::new();
    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));
    let sub_first = registry.subscribe(recorder(&first));
    let _sub_second = registry.subscribe(recorder(&second));

    drop(sub_first);
    registry.emit(AuthEvent::SignedIn, Some(&session("b")));

    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 1);
}

#[test]
fn listener_may_unsubscribe_during_emit() {
    let registry = ListenerRegistry::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(RefCell::new(0));

    let slot_in = slot.clone();
    let calls_in = calls.clone();
    let sub = registry.subscribe(Rc::new(move |_: AuthEvent, _: Option<&Session>| {
        *calls_in.borrow_mut() += 1;
        slot_in.borrow_mut().take();
    }));
    *slot.borrow_mut() = Some(sub);

    registry.emit(AuthEvent::SignedOut, None);
    registry.emit(AuthEvent::SignedOut, None);

    assert_eq!(*calls.borrow(), 1);
    assert!(registry.is_empty());
}

#[test]
fn subscription_outliving_registry_drops_cleanly() {
    let registry = ListenerRegistry::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sub = registry.subscribe(recorder(&log));
    drop(registry);
    drop(sub);
    assert!(log.borrow().is_empty());
}
