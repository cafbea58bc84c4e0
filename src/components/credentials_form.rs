//! Email + password form shared by the sign-in and sign-up pages.

use leptos::prelude::*;

use crate::state::action::ActionStatus;
use crate::util::form::validate_credentials;

/// Collects credentials, checks them locally, then hands them to `on_valid`.
///
/// `status` drives the pending label and the error line. Local validation
/// errors never reach `on_valid`.
#[component]
pub fn CredentialsForm(
    status: RwSignal<ActionStatus>,
    on_valid: Callback<(String, String)>,
    submit_label: &'static str,
    pending_label: &'static str,
    #[prop(default = "current-password")] password_autocomplete: &'static str,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let invalid = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_pending() {
            return;
        }
        match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => {
                invalid.set(None);
                on_valid.run(credentials);
            }
            Err(message) => invalid.set(Some(message)),
        }
    };

    let error = move || {
        invalid
            .get()
            .map(str::to_owned)
            .or_else(|| status.get().error().map(str::to_owned))
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__field">
                "Email"
                <input
                    class="auth-input"
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    disabled=move || status.get().is_pending()
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__field">
                "Password"
                <input
                    class="auth-input"
                    type="password"
                    autocomplete=password_autocomplete
                    disabled=move || status.get().is_pending()
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || status.get().is_pending()>
                {move || if status.get().is_pending() { pending_label } else { submit_label }}
            </button>
            <Show when=move || error().is_some()>
                <p class="form-error" role="alert">{move || error().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
