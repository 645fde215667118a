//! Infrastructure error handling
//!
//! Third-party errors are converted into [`MeetlineError`] here so the
//! domain and core crates never see transport-specific types.
//!
//! [`MeetlineError`]: meetline_domain::MeetlineError

pub mod conversions;

pub use conversions::{status_error, InfraError};
