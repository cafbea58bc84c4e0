//! Add-deal form: pick a rep, enter an amount, post the row.

use leptos::prelude::*;

use crate::app::AuthContext;
use crate::net::api::{ADD_DEAL_FAILED_MESSAGE, insert_deal};
use crate::net::types::NewDeal;
use crate::state::action::{ActionStatus, FormAction};
use crate::state::metrics::MetricsState;
use crate::util::form::{DEFAULT_DEAL_AMOUNT, parse_deal_value, validate_rep_name};
use crate::util::form_action::{mount_form_action, status_sink, submit_form_action};

/// Add-deal form. `on_added` runs after the row is stored.
#[component]
pub fn DealForm(metrics: RwSignal<MetricsState>, on_added: Callback<()>) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let rep = RwSignal::new(String::new());
    let amount = RwSignal::new(DEFAULT_DEAL_AMOUNT.to_owned());
    let invalid = RwSignal::new(None::<&'static str>);
    let status = RwSignal::new(ActionStatus::Idle);

    let action = mount_form_action(
        FormAction::new(
            move |deal: NewDeal| {
                let config = auth.config.get_value();
                let token = auth.access_token();
                async move {
                    let Some(token) = token else {
                        return Err(ADD_DEAL_FAILED_MESSAGE.to_owned());
                    };
                    insert_deal(&config, &token, &deal).await.map_err(|e| {
                        leptos::logging::warn!("add deal failed: {e}");
                        ADD_DEAL_FAILED_MESSAGE.to_owned()
                    })
                }
            },
            status_sink(status),
        )
        .on_success(move |_: &()| {
            amount.set(DEFAULT_DEAL_AMOUNT.to_owned());
            on_added.run(());
        }),
    );

    // An empty selection means the first rep in the list.
    let selected_rep = move || {
        let chosen = rep.get();
        if chosen.is_empty() {
            metrics.with(|m| m.rep_names().into_iter().next().unwrap_or_default())
        } else {
            chosen
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let checked = validate_rep_name(&selected_rep())
            .and_then(|name| parse_deal_value(&amount.get_untracked()).map(|value| NewDeal { name, value }));
        match checked {
            Ok(deal) => {
                invalid.set(None);
                submit_form_action(action, deal);
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
    let pending = move || status.get().is_pending();
    let aria_invalid = move || if error().is_some() { "true" } else { "false" };

    view! {
        <form
            class="deal-form"
            aria-label="Add new sales deal"
            aria-describedby="deal-form-description"
            on:submit=on_submit
        >
            <h2 class="deal-form__title">"Add Deal"</h2>
            <p id="deal-form-description" class="sr-only">
                "Use this form to add a new sales deal. Select a sales rep and enter the amount."
            </p>
            <label class="deal-form__field" for="deal-name">
                "Sales rep"
                <select
                    id="deal-name"
                    aria-required="true"
                    aria-invalid=aria_invalid
                    disabled=pending
                    prop:value=selected_rep
                    on:change=move |ev| rep.set(event_target_value(&ev))
                >
                    {move || {
                        metrics
                            .with(MetricsState::rep_names)
                            .into_iter()
                            .map(|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <label class="deal-form__field" for="deal-value">
                "Amount: $"
                <input
                    id="deal-value"
                    class="amount-input"
                    type="number"
                    min="0"
                    step="10"
                    aria-required="true"
                    aria-invalid=aria_invalid
                    aria-label="Deal amount in dollars"
                    disabled=pending
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary"
                type="submit"
                disabled=pending
                aria-busy=move || if pending() { "true" } else { "false" }
            >
                {move || if pending() { "Adding..." } else { "Add Deal" }}
            </button>
            <Show when=move || error().is_some()>
                <p class="form-error" role="alert">{move || error().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
