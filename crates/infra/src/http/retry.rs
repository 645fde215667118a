//! Retry policy for Meet API calls
//!
//! Session lists are fetched for many participants at once, so a rate-limited
//! response (429) is expected under load. It is retried like a 5xx, but a
//! server-provided `Retry-After` takes precedence over the computed backoff.
//! Every delay is capped so one slow hint cannot stall a whole report.

use std::time::Duration;

use meetline_domain::MeetApiConfig;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
    base_backoff: Duration,
    max_backoff: Duration,
}

impl RetryPolicy {
    /// `max_attempts` counts the first try; it is floored at 1.
    pub fn new(max_attempts: usize, base_backoff: Duration, max_backoff: Duration) -> Self {
        Self { max_attempts: max_attempts.max(1), base_backoff, max_backoff }
    }

    pub fn from_config(config: &MeetApiConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.base_backoff_ms),
            Duration::from_millis(config.max_backoff_ms),
        )
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Delay before the `retry`-th retry (1-based).
    pub fn delay(&self, retry: usize, server_hint: Option<Duration>) -> Duration {
        let computed = || {
            let doublings = retry.saturating_sub(1).min(16) as u32;
            self.base_backoff.saturating_mul(1u32 << doublings)
        };
        server_hint.unwrap_or_else(computed).min(self.max_backoff)
    }
}

/// Statuses worth another attempt: rate limiting and transient server errors.
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || matches!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR
                | StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT
        )
}

/// `Retry-After` in delta-seconds form. HTTP-date values are ignored.
pub(crate) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
