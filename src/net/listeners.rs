//! Ordered fan-out of session change notifications.
//!
//! Listeners are snapshotted before each emit, so a listener may drop its own
//! subscription (or register another) while a notification is in flight.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::credentials::{AuthEvent, AuthListener, Subscription};
use crate::state::session::Session;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, AuthListener)>>,
}

/// Registry of session change listeners.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<Listeners>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays registered until the handle is dropped.
    pub fn subscribe(&self, listener: AuthListener) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.entries.borrow_mut().push((id, listener));

        let weak: Weak<Listeners> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Deliver one notification to every listener, in registration order.
    pub fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        let snapshot: Vec<AuthListener> = self
            .inner
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(event, session);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}
