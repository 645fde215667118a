//! # Meetline Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with retry/backoff
//! - Google Meet REST integration (conference, participant, session sources)
//! - Configuration loading (file + environment)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `meetline-core`
//! - Depends on `meetline-domain` and `meetline-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, RetryPolicy};
pub use integrations::meet::MeetClient;
pub use observability::init_tracing;
