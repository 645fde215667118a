//! HTTP transport shared by provider integrations

pub mod client;
pub mod retry;

pub use client::HttpClient;
pub use retry::RetryPolicy;
