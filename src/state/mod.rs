//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `action`, `metrics`) so individual
//! components can depend on small focused models.

pub mod action;
pub mod metrics;
pub mod session;
pub mod session_store;
