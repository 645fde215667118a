//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HTTP_BACKOFF_MS, DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_MAX_BACKOFF_MS,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MAX_CONCURRENT_FETCHES, DEFAULT_MEET_API_BASE,
    DEFAULT_MIN_BAR_WIDTH_PERCENT, DEFAULT_PADDING_RATIO, DEFAULT_PAGE_SIZE, DEFAULT_TICK_COUNT,
    DEFAULT_ZERO_DURATION_PAD_SECS, MAX_TICK_COUNT, MIN_TICK_COUNT,
};
use crate::{MeetlineError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub meet: MeetApiConfig,
    pub report: ReportConfig,
    pub timeline: TimelineConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Validate every section that carries invariants.
    pub fn validate(&self) -> Result<()> {
        self.meet.validate()?;
        self.report.validate()?;
        self.timeline.validate()
    }
}

/// Meeting provider API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Total attempts per request (initial try + retries).
    pub max_attempts: usize,
    pub base_backoff_ms: u64,
    /// Cap on a single retry delay, `Retry-After` included.
    pub max_backoff_ms: u64,
    pub page_size: u32,
}

impl Default for MeetApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MEET_API_BASE.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
            base_backoff_ms: DEFAULT_HTTP_BACKOFF_MS,
            max_backoff_ms: DEFAULT_HTTP_MAX_BACKOFF_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl MeetApiConfig {
    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(MeetlineError::Config("meet.base_url must not be empty".into()));
        }
        if self.max_attempts == 0 {
            return Err(MeetlineError::Config("meet.max_attempts must be at least 1".into()));
        }
        if self.page_size == 0 {
            return Err(MeetlineError::Config("meet.page_size must be at least 1".into()));
        }
        Ok(())
    }
}

/// Report assembly configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Upper bound on in-flight session retrievals per report.
    pub max_concurrent_fetches: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES }
    }
}

impl ReportConfig {
    fn validate(&self) -> Result<()> {
        if self.max_concurrent_fetches == 0 {
            return Err(MeetlineError::Config(
                "report.max_concurrent_fetches must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Timeline rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub tick_count: usize,
    pub padding_ratio: f64,
    pub min_bar_width_percent: f64,
    /// Padding applied on each side when every session collapses to one
    /// instant.
    pub zero_duration_pad_secs: u64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            padding_ratio: DEFAULT_PADDING_RATIO,
            min_bar_width_percent: DEFAULT_MIN_BAR_WIDTH_PERCENT,
            zero_duration_pad_secs: DEFAULT_ZERO_DURATION_PAD_SECS,
        }
    }
}

impl TimelineConfig {
    /// Check the documented ranges: `2 <= tick_count <= 1000`, finite
    /// non-negative ratios.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TICK_COUNT..=MAX_TICK_COUNT).contains(&self.tick_count) {
            return Err(MeetlineError::Config(format!(
                "timeline.tick_count must be between {MIN_TICK_COUNT} and {MAX_TICK_COUNT}, got {}",
                self.tick_count
            )));
        }
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(MeetlineError::Config(format!(
                "timeline.padding_ratio must be a finite value >= 0, got {}",
                self.padding_ratio
            )));
        }
        if !self.min_bar_width_percent.is_finite() || self.min_bar_width_percent < 0.0 {
            return Err(MeetlineError::Config(format!(
                "timeline.min_bar_width_percent must be a finite value >= 0, got {}",
                self.min_bar_width_percent
            )));
        }
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 3000 }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
