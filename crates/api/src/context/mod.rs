//! Application context - dependency injection container

use std::sync::Arc;

use meetline_core::AttendanceReportService;
use meetline_domain::{Config, Result};
use meetline_infra::MeetClient;
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub reports: Arc<AttendanceReportService>,
}

impl AppContext {
    /// Build the context from a validated configuration.
    ///
    /// A single Meet client backs all three provider ports.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let meet = Arc::new(MeetClient::from_config(&config.meet)?);
        let reports = AttendanceReportService::new(meet.clone(), meet.clone(), meet)
            .with_max_concurrency(config.report.max_concurrent_fetches);

        info!(
            base_url = %config.meet.base_url,
            max_concurrent_fetches = config.report.max_concurrent_fetches,
            "application context initialized"
        );

        Ok(Self { config, reports: Arc::new(reports) })
    }
}
