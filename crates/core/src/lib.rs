//! # Meetline Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the meeting provider
//! - Attendance report assembly and display-name resolution
//! - Timeline domain, bar layout and view computation
//!
//! ## Architecture Principles
//! - Only depends on `meetline-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod attendance;
pub mod timeline;

// Re-export specific items to avoid ambiguity
pub use attendance::ports::{ConferenceSource, ParticipantSource, SessionSource};
pub use attendance::{
    conference_record_name, resolve_display_name, AttendanceReportService, AttendanceTimeline,
    ReportAssembler,
};
pub use timeline::{
    build_view, compute_domain, layout_session, NoDataReason, TimelineError, TimelineOutcome,
    TimelineView,
};
