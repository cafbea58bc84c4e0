//! Per-form submit state machine.
//!
//! DESIGN
//! ======
//! `Idle -> Pending -> {Idle, Failed}`, with `Failed -> Pending` on
//! resubmit. A submit while `Pending` is dropped, never queued. Each form
//! mount owns a fresh instance; its teardown guard is flipped on unmount so a
//! result landing afterwards is discarded instead of writing into disposed
//! UI state.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::FutureExt;
use futures::future::LocalBoxFuture;

/// Submission status rendered by a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActionStatus {
    #[default]
    Idle,
    Pending,
    Failed(String),
}

impl ActionStatus {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Idle | Self::Pending => None,
        }
    }
}

type Operation<I, O> = Rc<dyn Fn(I) -> LocalBoxFuture<'static, Result<O, String>>>;
type SuccessHook<O> = Rc<dyn Fn(&O)>;

struct Shared<O> {
    status: RefCell<ActionStatus>,
    alive: Arc<AtomicBool>,
    publish: Rc<dyn Fn(&ActionStatus)>,
    on_success: RefCell<Option<SuccessHook<O>>>,
}

impl<O> Shared<O> {
    fn set(&self, next: ActionStatus) {
        self.status.replace(next.clone());
        (self.publish)(&next);
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// One form's submit operation plus its status.
pub struct FormAction<I, O> {
    operation: Operation<I, O>,
    shared: Rc<Shared<O>>,
}

impl<I, O> Clone for FormAction<I, O> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation.clone(),
            shared: self.shared.clone(),
        }
    }
}

impl<I: 'static, O: 'static> FormAction<I, O> {
    /// Wrap `operation`. `publish` sees every status change, in order.
    pub fn new<F, Fut>(operation: F, publish: impl Fn(&ActionStatus) + 'static) -> Self
    where
        F: Fn(I) -> Fut + 'static,
        Fut: Future<Output = Result<O, String>> + 'static,
    {
        Self {
            operation: Rc::new(move |input| operation(input).boxed_local()),
            shared: Rc::new(Shared {
                status: RefCell::new(ActionStatus::Idle),
                alive: Arc::new(AtomicBool::new(true)),
                publish: Rc::new(publish),
                on_success: RefCell::new(None),
            }),
        }
    }

    /// Run `hook` with the operation's output after each successful
    /// submission.
    #[must_use]
    pub fn on_success(self, hook: impl Fn(&O) + 'static) -> Self {
        self.shared.on_success.replace(Some(Rc::new(hook)));
        self
    }

    #[must_use]
    pub fn status(&self) -> ActionStatus {
        self.shared.status.borrow().clone()
    }

    /// Start a submission.
    ///
    /// Returns `None` without side effects when a submission is already
    /// pending or the form was torn down. Otherwise the status is `Pending`
    /// on return and the caller must drive the returned task to completion.
    pub fn submit(&self, input: I) -> Option<LocalBoxFuture<'static, ()>> {
        if !self.shared.is_alive() || self.shared.status.borrow().is_pending() {
            return None;
        }
        self.shared.set(ActionStatus::Pending);

        let task = (self.operation)(input);
        let shared = self.shared.clone();
        Some(
            async move {
                let result = task.await;
                if !shared.is_alive() {
                    leptos::logging::log!("form torn down before submission finished; result discarded");
                    return;
                }
                match result {
                    Ok(output) => {
                        shared.set(ActionStatus::Idle);
                        let hook = shared.on_success.borrow().clone();
                        if let Some(hook) = hook {
                            hook(&output);
                        }
                    }
                    Err(message) => shared.set(ActionStatus::Failed(message)),
                }
            }
            .boxed_local(),
        )
    }

    /// Handle used by the owning component's cleanup to stop this action
    /// from touching state after unmount.
    #[must_use]
    pub fn teardown_guard(&self) -> TeardownGuard {
        TeardownGuard(self.shared.alive.clone())
    }
}

/// Send + Sync handle that marks a [`FormAction`] as torn down.
#[derive(Clone, Debug)]
pub struct TeardownGuard(Arc<AtomicBool>);

impl TeardownGuard {
    pub fn dispose(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
