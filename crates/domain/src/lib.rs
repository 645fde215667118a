//! # Meetline Domain
//!
//! Business domain types and models for Meetline.
//!
//! This crate contains:
//! - Attendance data types (Participant, Session, ReportEntry, ...)
//! - Timeline geometry types (TimeDomain, SessionBar)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Meetline crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
