//! Horizontal bar chart of deal totals per sales rep.

#[cfg(test)]
#[path = "metrics_chart_test.rs"]
mod metrics_chart_test;

use leptos::prelude::*;

use crate::state::metrics::MetricsState;

fn format_amount(value: f64) -> String {
    format!("${value:.2}")
}

#[component]
pub fn MetricsChart(metrics: RwSignal<MetricsState>) -> impl IntoView {
    view! {
        <section class="metrics" aria-label="Total sales by rep">
            <h2 class="metrics__title">"Total Sales"</h2>
            <Show when=move || metrics.with(|m| m.loading && m.items.is_empty())>
                <p class="metrics__empty" role="status">"Loading metrics..."</p>
            </Show>
            <Show when=move || metrics.with(|m| m.error.is_some())>
                <p class="form-error" role="alert">
                    "Could not load sales metrics: "
                    {move || metrics.with(|m| m.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show when=move || metrics.with(|m| !m.loading && m.error.is_none() && m.items.is_empty())>
                <p class="metrics__empty">"No deals recorded yet."</p>
            </Show>
            <ul class="metrics__bars">
                {move || {
                    metrics.with(|m| {
                        m.items
                            .iter()
                            .map(|item| {
                                let width = format!("width: {:.1}%", m.bar_percent(item));
                                view! {
                                    <li class="metrics__row">
                                        <span class="metrics__name">{item.name.clone()}</span>
                                        <span class="metrics__bar" style=width></span>
                                        <span class="metrics__sum">{format_amount(item.sum)}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </ul>
            <p class="metrics__total">
                "Total: " {move || metrics.with(|m| format_amount(m.total()))}
            </p>
        </section>
    }
}
