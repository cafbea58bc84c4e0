//! Sign-up page. Depending on the service's confirmation settings a new
//! account is either signed in immediately or waits for email confirmation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AuthContext;
use crate::components::credentials_form::CredentialsForm;
use crate::state::action::{ActionStatus, FormAction};
use crate::state::session::Session;
use crate::util::form_action::{mount_form_action, status_sink, submit_form_action};
use crate::util::guard::{DASHBOARD_PATH, SIGN_IN_PATH};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let status = RwSignal::new(ActionStatus::Idle);
    let awaiting_confirmation = RwSignal::new(false);

    let store = auth.store;
    let action = mount_form_action(
        FormAction::new(
            move |(email, password): (String, String)| {
                let store = store.get_value();
                async move { store.sign_up(&email, &password).await.into_result() }
            },
            status_sink(status),
        )
        .on_success(move |session: &Option<Session>| {
            if session.is_some() {
                navigate(DASHBOARD_PATH, NavigateOptions::default());
            } else {
                awaiting_confirmation.set(true);
            }
        }),
    );

    let on_valid = Callback::new(move |credentials: (String, String)| {
        awaiting_confirmation.set(false);
        submit_form_action(action, credentials);
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sales Team Dashboard"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <Show when=move || awaiting_confirmation.get()>
                    <p class="auth-notice" role="status">
                        "Check your email to confirm your account, then sign in."
                    </p>
                </Show>
                <CredentialsForm
                    status=status
                    on_valid=on_valid
                    submit_label="Sign up"
                    pending_label="Signing up..."
                    password_autocomplete="new-password"
                />
                <p class="auth-card__switch">
                    "Already have an account? " <a href=SIGN_IN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
