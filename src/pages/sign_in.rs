//! Sign-in page: email + password against the credential service.
//!
//! Also surfaces a failed initial session fetch with a retry control, since
//! an unreachable service lands the user here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AuthContext;
use crate::components::credentials_form::CredentialsForm;
use crate::state::action::{ActionStatus, FormAction};
use crate::state::session::Session;
use crate::util::form_action::{mount_form_action, status_sink, submit_form_action};
use crate::util::guard::{DASHBOARD_PATH, SIGN_UP_PATH};

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let status = RwSignal::new(ActionStatus::Idle);

    let store = auth.store;
    let action = mount_form_action(
        FormAction::new(
            move |(email, password): (String, String)| {
                let store = store.get_value();
                async move { store.sign_in(&email, &password).await.into_result() }
            },
            status_sink(status),
        )
        .on_success(move |_: &Option<Session>| navigate(DASHBOARD_PATH, NavigateOptions::default())),
    );

    let on_valid = Callback::new(move |credentials: (String, String)| submit_form_action(action, credentials));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sales Team Dashboard"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <Show when=move || auth.init_error.get().is_some()>
                    <div class="auth-notice" role="alert">
                        <p>
                            "We couldn't check your session: "
                            {move || auth.init_error.get().unwrap_or_default()}
                        </p>
                        <button class="btn btn--secondary" type="button" on:click=move |_| auth.initialize()>
                            "Retry"
                        </button>
                    </div>
                </Show>
                <CredentialsForm
                    status=status
                    on_valid=on_valid
                    submit_label="Sign in"
                    pending_label="Signing in..."
                />
                <p class="auth-card__switch">
                    "No account? " <a href=SIGN_UP_PATH>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
