use super::*;

fn metric(name: &str, sum: f64) -> Metric {
    Metric {
        name: name.to_owned(),
        sum,
    }
}

#[test]
fn metrics_state_defaults() {
    let s = MetricsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn apply_success_sorts_by_total_then_name() {
    let mut s = MetricsState { loading: true, error: Some("old".to_owned()), ..MetricsState::default() };
    s.apply(Ok(vec![metric("Ben", 100.0), metric("Cy", 300.0), metric("Ava", 100.0)]));
    assert!(!s.loading);
    assert!(s.error.is_none());
    assert_eq!(s.rep_names(), vec!["Cy", "Ava", "Ben"]);
}

#[test]
fn apply_failure_keeps_items() {
    let mut s = MetricsState::default();
    s.apply(Ok(vec![metric("Ava", 10.0)]));
    s.loading = true;
    s.apply(Err("metrics request failed: 500".to_owned()));
    assert!(!s.loading);
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.error.as_deref(), Some("metrics request failed: 500"));
}

#[test]
fn total_sums_items() {
    let mut s = MetricsState::default();
    s.apply(Ok(vec![metric("Ava", 10.0), metric("Ben", 32.5)]));
    assert!((s.total() - 42.5).abs() < f64::EPSILON);
}

#[test]
fn bar_percent_scales_to_largest() {
    let mut s = MetricsState::default();
    s.apply(Ok(vec![metric("Ava", 200.0), metric("Ben", 50.0)]));
    assert!((s.bar_percent(&s.items[0]) - 100.0).abs() < f64::EPSILON);
    assert!((s.bar_percent(&s.items[1]) - 25.0).abs() < f64::EPSILON);
}

#[test]
fn bar_percent_is_zero_without_positive_totals() {
    let mut s = MetricsState::default();
    s.apply(Ok(vec![metric("Ava", 0.0)]));
    assert!(s.bar_percent(&s.items[0]).abs() < f64::EPSILON);
}
