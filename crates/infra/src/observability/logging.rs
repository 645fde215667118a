use meetline_domain::{LoggingConfig, MeetlineError, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` when set, otherwise the configured
/// level directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(config.level.trim()).map_err(|e| {
        MeetlineError::Config(format!("invalid log level {:?}: {e}", config.level))
    })
}

/// Install the global `tracing` subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed (tests and
/// embedding hosts may set their own).
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = build_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    };

    Ok(installed)
}
