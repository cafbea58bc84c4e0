//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and route guards while reading shared
//! auth state from the `AuthContext` provider.

pub mod credentials_form;
pub mod deal_form;
pub mod header;
pub mod metrics_chart;
pub mod route_guard;
