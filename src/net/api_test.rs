use futures::executor::block_on;

use super::*;

#[test]
fn deals_endpoint_formats_expected_path() {
    assert_eq!(
        deals_endpoint("https://abc.supabase.co"),
        "https://abc.supabase.co/rest/v1/sales_deals"
    );
}

#[test]
fn metrics_endpoint_requests_sum_per_name() {
    assert_eq!(
        metrics_endpoint("http://localhost:54321"),
        "http://localhost:54321/rest/v1/sales_deals?select=name,value.sum()"
    );
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("deal insert", 403), "deal insert failed: 403");
}

#[test]
fn data_calls_fail_outside_browser() {
    let config = ServiceConfig::default();
    assert!(block_on(fetch_metrics(&config, "token")).is_err());
    let deal = NewDeal { name: "Ava".to_owned(), value: 100.0 };
    assert!(block_on(insert_deal(&config, "token", &deal)).is_err());
}
