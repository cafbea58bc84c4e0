//! Leptos glue for per-form [`FormAction`]s.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every form mounts its own action and must stop it from touching UI state
//! once unmounted; these helpers keep that wiring identical across forms.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::state::action::{ActionStatus, FormAction};

/// Stored handle to a mounted form action.
pub type StoredAction<I, O> = StoredValue<FormAction<I, O>, LocalStorage>;

/// Publish callback that mirrors action status into `status`.
pub fn status_sink(status: RwSignal<ActionStatus>) -> impl Fn(&ActionStatus) + 'static {
    move |next: &ActionStatus| {
        let _ = status.try_set(next.clone());
    }
}

/// Store `action` for the current owner and tear it down on cleanup.
pub fn mount_form_action<I: 'static, O: 'static>(action: FormAction<I, O>) -> StoredAction<I, O> {
    let guard = action.teardown_guard();
    on_cleanup(move || guard.dispose());
    StoredValue::new_local(action)
}

/// Submit `input` and drive the submission on the local executor.
///
/// Does nothing while a submission is pending.
pub fn submit_form_action<I: 'static, O: 'static>(action: StoredAction<I, O>, input: I) {
    let started = action.try_with_value(|a| match a.submit(input) {
        Some(task) => Ok(task),
        None => Err(a.status()),
    });
    match started {
        Some(Ok(task)) => leptos::task::spawn_local(task),
        Some(Err(status)) => leptos::logging::log!("form submission ignored while {status:?}"),
        None => {}
    }
}
