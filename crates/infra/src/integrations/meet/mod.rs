//! Google Meet REST integration
//!
//! Implements the conference, participant and session ports against the
//! Meet v2 API. Every list endpoint is paginated through `nextPageToken`.

pub mod client;
pub mod types;

pub use client::MeetClient;
