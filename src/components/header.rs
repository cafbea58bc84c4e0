//! Dashboard header with the signed-in email and a sign-out control.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AuthContext;
use crate::state::action::{ActionStatus, FormAction};
use crate::util::form_action::{mount_form_action, status_sink, submit_form_action};
use crate::util::guard::ROOT_PATH;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let status = RwSignal::new(ActionStatus::Idle);

    let store = auth.store;
    let sign_out = mount_form_action(
        FormAction::new(
            move |()| {
                let store = store.get_value();
                async move { store.sign_out().await.into_result().map(|_| ()) }
            },
            status_sink(status),
        )
        .on_success(move |_: &()| navigate(ROOT_PATH, NavigateOptions::default())),
    );

    let email = move || auth.session.with(|s| s.email().unwrap_or_default().to_owned());

    view! {
        <header class="app-header">
            <h1 class="app-header__title">"Sales Team Dashboard"</h1>
            <div class="app-header__account">
                <span class="app-header__email">{email}</span>
                <button
                    class="btn btn--secondary"
                    type="button"
                    disabled=move || status.get().is_pending()
                    on:click=move |_| submit_form_action(sign_out, ())
                >
                    {move || if status.get().is_pending() { "Signing out..." } else { "Sign out" }}
                </button>
            </div>
            <Show when=move || status.get().error().is_some()>
                <p class="form-error" role="alert">
                    {move || status.get().error().unwrap_or_default().to_owned()}
                </p>
            </Show>
        </header>
    }
}
