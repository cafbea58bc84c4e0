use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

type Reply = Result<u32, String>;

/// Operation whose completions are released by the test, one per call.
struct Harness {
    calls: Rc<RefCell<Vec<String>>>,
    replies: Rc<RefCell<VecDeque<oneshot::Sender<Reply>>>>,
    published: Rc<RefCell<Vec<ActionStatus>>>,
    successes: Rc<RefCell<Vec<u32>>>,
    action: FormAction<String, u32>,
}

impl Harness {
    fn new() -> Self {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let replies: Rc<RefCell<VecDeque<oneshot::Sender<Reply>>>> = Rc::new(RefCell::new(VecDeque::new()));
        let published = Rc::new(RefCell::new(Vec::new()));
        let successes = Rc::new(RefCell::new(Vec::new()));

        let calls_in = calls.clone();
        let replies_in = replies.clone();
        let published_in = published.clone();
        let successes_in = successes.clone();
        let action = FormAction::new(
            move |input: String| {
                calls_in.borrow_mut().push(input);
                let (tx, rx) = oneshot::channel();
                replies_in.borrow_mut().push_back(tx);
                async move { rx.await.unwrap_or_else(|_| Err("dropped".to_owned())) }
            },
            move |status: &ActionStatus| published_in.borrow_mut().push(status.clone()),
        )
        .on_success(move |value: &u32| successes_in.borrow_mut().push(*value));

        Self {
            calls,
            replies,
            published,
            successes,
            action,
        }
    }

    fn reply(&self, reply: Reply) {
        let tx = self.replies.borrow_mut().pop_front().expect("a pending call");
        tx.send(reply).expect("task still waiting");
    }
}

#[test]
fn new_action_is_idle() {
    let h = Harness::new();
    assert_eq!(h.action.status(), ActionStatus::Idle);
    assert!(h.action.status().error().is_none());
    assert!(h.published.borrow().is_empty());
}

#[test]
fn submit_is_pending_before_task_runs() {
    let h = Harness::new();
    let task = h.action.submit("a@b.com".to_owned());
    assert!(task.is_some());
    assert_eq!(h.action.status(), ActionStatus::Pending);
    assert_eq!(*h.published.borrow(), vec![ActionStatus::Pending]);
}

#[test]
fn submit_while_pending_is_ignored() {
    let h = Harness::new();
    let first = h.action.submit("first".to_owned()).expect("first submit");

    assert!(h.action.submit("second".to_owned()).is_none());
    assert!(h.action.submit("third".to_owned()).is_none());

    assert_eq!(h.action.status(), ActionStatus::Pending);
    assert_eq!(*h.calls.borrow(), vec!["first".to_owned()]);
    assert_eq!(h.replies.borrow().len(), 1);
    assert_eq!(h.published.borrow().len(), 1);

    h.reply(Ok(1));
    block_on(first);
    assert_eq!(h.action.status(), ActionStatus::Idle);
}

#[test]
fn failure_then_resubmit_runs_again() {
    let h = Harness::new();
    let task = h.action.submit("x".to_owned()).expect("submit");
    h.reply(Err("Invalid credentials".to_owned()));
    block_on(task);
    assert_eq!(h.action.status(), ActionStatus::Failed("Invalid credentials".to_owned()));
    assert_eq!(h.action.status().error(), Some("Invalid credentials"));

    let retry = h.action.submit("corrected".to_owned()).expect("retry allowed from Failed");
    assert_eq!(h.action.status(), ActionStatus::Pending);
    assert!(h.action.status().error().is_none());

    h.reply(Ok(7));
    block_on(retry);
    assert_eq!(h.action.status(), ActionStatus::Idle);
    assert_eq!(
        *h.published.borrow(),
        vec![
            ActionStatus::Pending,
            ActionStatus::Failed("Invalid credentials".to_owned()),
            ActionStatus::Pending,
            ActionStatus::Idle,
        ]
    );
}

#[test]
fn new_failure_replaces_previous_one() {
    let h = Harness::new();
    let task = h.action.submit("x".to_owned()).expect("submit");
    h.reply(Err("first".to_owned()));
    block_on(task);

    let task = h.action.submit("y".to_owned()).expect("submit");
    h.reply(Err("second".to_owned()));
    block_on(task);

    assert_eq!(h.action.status(), ActionStatus::Failed("second".to_owned()));
}

#[test]
fn success_hook_runs_only_on_success() {
    let h = Harness::new();
    let task = h.action.submit("x".to_owned()).expect("submit");
    h.reply(Err("nope".to_owned()));
    block_on(task);
    assert!(h.successes.borrow().is_empty());

    let task = h.action.submit("y".to_owned()).expect("submit");
    h.reply(Ok(42));
    block_on(task);
    assert_eq!(*h.successes.borrow(), vec![42]);
}

#[test]
fn teardown_discards_late_result() {
    let h = Harness::new();
    let guard = h.action.teardown_guard();
    let task = h.action.submit("x".to_owned()).expect("submit");

    guard.dispose();
    h.reply(Ok(5));
    block_on(task);

    assert_eq!(h.action.status(), ActionStatus::Pending);
    assert_eq!(*h.published.borrow(), vec![ActionStatus::Pending]);
    assert!(h.successes.borrow().is_empty());
}

#[test]
fn torn_down_action_ignores_submit() {
    let h = Harness::new();
    h.action.teardown_guard().dispose();
    assert!(h.action.submit("x".to_owned()).is_none());
    assert!(h.calls.borrow().is_empty());
    assert_eq!(h.action.status(), ActionStatus::Idle);
}

#[test]
fn clones_share_status() {
    let h = Harness::new();
    let clone = h.action.clone();
    let _task = clone.submit("x".to_owned()).expect("submit");
    assert!(h.action.submit("y".to_owned()).is_none());
    assert!(h.action.status().is_pending());
}
