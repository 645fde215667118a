//! Application state for the HTTP server.

use std::sync::Arc;

use meetline_core::AttendanceReportService;
use meetline_domain::TimelineConfig;

use crate::context::AppContext;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub reports: Arc<AttendanceReportService>,
    pub timeline: Arc<TimelineConfig>,
}

impl AppState {
    pub fn new(reports: Arc<AttendanceReportService>, timeline: TimelineConfig) -> Self {
        Self { reports, timeline: Arc::new(timeline) }
    }
}

impl From<&AppContext> for AppState {
    fn from(ctx: &AppContext) -> Self {
        Self::new(ctx.reports.clone(), ctx.config.timeline.clone())
    }
}
