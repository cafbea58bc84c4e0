//! Route guards driven by the shared session signal.
//!
//! Each guard maps the current `SessionState` to a `GuardDecision` (see
//! `util::guard`) and renders a placeholder, its children, or a redirect.
//! Decisions are memoized so a token refresh does not remount the page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::app::AuthContext;
use crate::state::session::SessionState;
use crate::util::guard::{GuardDecision, guest_only, protected_route, root_redirect};

/// Placeholder shown while the session is still unknown.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            "Loading..."
        </div>
    }
}

fn decision_memo(decide: fn(&SessionState) -> GuardDecision) -> Memo<GuardDecision> {
    let auth = expect_context::<AuthContext>();
    Memo::new(move |_| auth.session.with(decide))
}

fn render_decision(decision: Memo<GuardDecision>, children: Option<ChildrenFn>) -> impl IntoView {
    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingPlaceholder/> }.into_any(),
        GuardDecision::Render => children.as_ref().map(|c| c()).into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

/// Renders children only for a signed-in user; otherwise sends them to sign-in.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    render_decision(decision_memo(protected_route), Some(children))
}

/// Renders children only for a signed-out user; otherwise sends them to the dashboard.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    render_decision(decision_memo(guest_only), Some(children))
}

/// `/` never renders content of its own.
#[component]
pub fn RootRedirect() -> impl IntoView {
    render_decision(decision_memo(root_redirect), None)
}
