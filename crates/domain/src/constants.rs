//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Name resolution fallbacks
pub const ANONYMOUS_LABEL: &str = "Anonymous";
pub const PHONE_LABEL: &str = "Phone";
pub const UNKNOWN_LABEL: &str = "Unknown";

// Timeline defaults
pub const DEFAULT_TICK_COUNT: usize = 5;
pub const MIN_TICK_COUNT: usize = 2;
pub const MAX_TICK_COUNT: usize = 1_000;
pub const DEFAULT_PADDING_RATIO: f64 = 0.05;
pub const DEFAULT_MIN_BAR_WIDTH_PERCENT: f64 = 0.5;
pub const DEFAULT_ZERO_DURATION_PAD_SECS: u64 = 60;
pub const TICK_LABEL_FORMAT: &str = "%H:%M";
pub const SESSION_LABEL_FORMAT: &str = "%H:%M:%S";

// Provider defaults
pub const DEFAULT_MEET_API_BASE: &str = "https://meet.googleapis.com/v2";
pub const CONFERENCE_RECORDS_COLLECTION: &str = "conferenceRecords";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_HTTP_BACKOFF_MS: u64 = 200;
/// Upper bound on any single retry delay, including a server's `Retry-After`.
pub const DEFAULT_HTTP_MAX_BACKOFF_MS: u64 = 10_000;

// Report assembly
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 8;
