//! # Meetline API
//!
//! HTTP surface for attendance reports and timelines.
//!
//! ## Architecture
//! - `context`: wires configuration and the Meet client into the core service
//! - `http`: axum router, handlers, bearer extraction, error mapping

pub mod context;
pub mod http;

pub use context::AppContext;
pub use http::{create_router, AppState};
