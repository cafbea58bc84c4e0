//! Dashboard page: per-rep deal totals and the add-deal form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only behind `ProtectedRoute`, so a session is present on mount.
//! Metrics load once on mount, after every added deal, and on a slow poll so
//! deals added elsewhere show up.

use leptos::prelude::*;

use crate::app::AuthContext;
use crate::components::deal_form::DealForm;
use crate::components::header::Header;
use crate::components::metrics_chart::MetricsChart;
use crate::net::api::fetch_metrics;
use crate::state::metrics::MetricsState;

#[cfg(feature = "csr")]
const METRICS_POLL_SECS: u64 = 30;

/// Start a metrics fetch, keeping the current items while it runs.
fn load_metrics(auth: AuthContext, metrics: RwSignal<MetricsState>) {
    let Some(token) = auth.access_token() else {
        return;
    };
    let config = auth.config.get_value();
    let _ = metrics.try_update(|m| m.loading = true);
    leptos::task::spawn_local(async move {
        let result = fetch_metrics(&config, &token).await;
        if let Err(e) = &result {
            leptos::logging::warn!("metrics fetch failed: {e}");
        }
        let _ = metrics.try_update(|m| m.apply(result));
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let metrics = RwSignal::new(MetricsState::default());

    load_metrics(auth, metrics);

    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(METRICS_POLL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if metrics.with_untracked(|m| m.loading) {
                    continue;
                }
                load_metrics(auth, metrics);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_added = Callback::new(move |()| load_metrics(auth, metrics));

    view! {
        <div class="dashboard-page">
            <Header/>
            <main class="dashboard-main">
                <MetricsChart metrics=metrics/>
                <DealForm metrics=metrics on_added=on_added/>
            </main>
        </div>
    }
}
