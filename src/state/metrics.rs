//! Sales metrics state for the dashboard.
//!
//! DESIGN
//! ======
//! Kept apart from session state so a failed data fetch never touches
//! authentication.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::net::types::Metric;

/// Per-rep totals plus fetch status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsState {
    pub items: Vec<Metric>,
    pub loading: bool,
    pub error: Option<String>,
}

impl MetricsState {
    /// Apply a fetch result, keeping the previous items on failure.
    pub fn apply(&mut self, result: Result<Vec<Metric>, String>) {
        self.loading = false;
        match result {
            Ok(mut items) => {
                items.sort_by(|a, b| b.sum.total_cmp(&a.sum).then_with(|| a.name.cmp(&b.name)));
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Rep names for the add-deal selector, in display order.
    #[must_use]
    pub fn rep_names(&self) -> Vec<String> {
        self.items.iter().map(|m| m.name.clone()).collect()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(|m| m.sum).sum()
    }

    /// Bar width for `metric` as a percentage of the largest total.
    #[must_use]
    pub fn bar_percent(&self, metric: &Metric) -> f64 {
        let max = self.items.iter().map(|m| m.sum).fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return 0.0;
        }
        (metric.sum / max * 100.0).clamp(0.0, 100.0)
    }
}
