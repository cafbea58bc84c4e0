//! REST helpers for the sales data tables.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so data failures degrade
//! the dashboard without taking down the session UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Metric, NewDeal};
use crate::config::ServiceConfig;

/// Message shown by the add-deal form for any insert failure.
pub const ADD_DEAL_FAILED_MESSAGE: &str = "Failed to add deal. Please try again";

fn deals_endpoint(base: &str) -> String {
    format!("{base}/rest/v1/sales_deals")
}

fn metrics_endpoint(base: &str) -> String {
    format!("{}?select=name,value.sum()", deals_endpoint(base))
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch per-rep deal totals.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_metrics(config: &ServiceConfig, access_token: &str) -> Result<Vec<Metric>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&metrics_endpoint(&config.url))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("metrics request", resp.status()));
        }
        resp.json::<Vec<Metric>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (metrics_endpoint(&config.url), access_token);
        Err("not available outside the browser".to_owned())
    }
}

/// Insert one deal row.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn insert_deal(config: &ServiceConfig, access_token: &str, deal: &NewDeal) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&deals_endpoint(&config.url))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .header("Prefer", "return=minimal")
            .json(deal)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("deal insert", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (deals_endpoint(&config.url), access_token, deal);
        Err("not available outside the browser".to_owned())
    }
}
