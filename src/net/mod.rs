//! Network layer: the credential service contract, its GoTrue
//! implementation, and the sales data REST helpers.

pub mod api;
pub mod credentials;
pub mod listeners;
pub mod supabase;
pub mod transport;
pub mod types;
