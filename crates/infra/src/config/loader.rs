//! Configuration loader
//!
//! Loads application configuration from an optional file, then layers
//! environment overrides on top.
//!
//! ## Loading Strategy
//! 1. Probe the standard locations for a config file (JSON or TOML)
//! 2. Fall back to built-in defaults when no file exists
//! 3. Apply `MEETLINE_*` environment overrides
//! 4. Validate the merged result
//!
//! ## Environment Variables
//! - `MEETLINE_API_BASE_URL`: Meet API base URL
//! - `MEETLINE_HTTP_TIMEOUT`: Request timeout in seconds
//! - `MEETLINE_HTTP_MAX_ATTEMPTS`: Attempts per request, including the first
//! - `MEETLINE_HTTP_MAX_BACKOFF_MS`: Cap on a single retry delay, in milliseconds
//! - `MEETLINE_MAX_CONCURRENT_FETCHES`: Concurrent session retrievals per report
//! - `MEETLINE_TICK_COUNT`: Timeline tick count
//! - `MEETLINE_PADDING_RATIO`: Timeline padding ratio
//! - `MEETLINE_MIN_BAR_WIDTH`: Minimum bar width, in percent
//! - `MEETLINE_HOST` / `MEETLINE_PORT`: Server bind address
//! - `MEETLINE_LOG_LEVEL`: Default log filter
//! - `MEETLINE_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./meetline.{toml,json}` or `./config.{toml,json}` (current directory)
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use meetline_domain::{Config, MeetlineError, Result};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["meetline.toml", "meetline.json", "config.toml", "config.json"];

/// Load configuration: file (if any), then environment, then validation.
///
/// # Errors
/// Returns `MeetlineError::Config` if a file is malformed, an override
/// cannot be parsed, or the merged configuration is out of range.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Missing sections and
/// fields take their defaults.
///
/// # Errors
/// Returns `MeetlineError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MeetlineError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MeetlineError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MeetlineError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Apply `MEETLINE_*` overrides on top of `config`.
///
/// Unset variables leave the current value untouched.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(base_url) = env_string("MEETLINE_API_BASE_URL") {
        config.meet.base_url = base_url;
    }
    if let Some(timeout) = env_parse("MEETLINE_HTTP_TIMEOUT")? {
        config.meet.timeout_secs = timeout;
    }
    if let Some(attempts) = env_parse("MEETLINE_HTTP_MAX_ATTEMPTS")? {
        config.meet.max_attempts = attempts;
    }
    if let Some(cap) = env_parse("MEETLINE_HTTP_MAX_BACKOFF_MS")? {
        config.meet.max_backoff_ms = cap;
    }
    if let Some(limit) = env_parse("MEETLINE_MAX_CONCURRENT_FETCHES")? {
        config.report.max_concurrent_fetches = limit;
    }
    if let Some(ticks) = env_parse("MEETLINE_TICK_COUNT")? {
        config.timeline.tick_count = ticks;
    }
    if let Some(ratio) = env_parse("MEETLINE_PADDING_RATIO")? {
        config.timeline.padding_ratio = ratio;
    }
    if let Some(width) = env_parse("MEETLINE_MIN_BAR_WIDTH")? {
        config.timeline.min_bar_width_percent = width;
    }
    if let Some(host) = env_string("MEETLINE_HOST") {
        config.server.host = host;
    }
    if let Some(port) = env_parse("MEETLINE_PORT")? {
        config.server.port = port;
    }
    if let Some(level) = env_string("MEETLINE_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("MEETLINE_LOG_JSON", config.logging.json);
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MeetlineError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MeetlineError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MeetlineError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Non-blank environment variable, trimmed.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `MeetlineError::Config` when the variable is set but malformed.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_string(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| MeetlineError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
