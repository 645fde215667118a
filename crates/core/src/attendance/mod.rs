//! Attendance report assembly
//!
//! Joins provider participants with their sessions and resolves the labels
//! shown on each timeline row.

pub mod assembler;
pub mod name_resolver;
pub mod ports;
pub mod service;

pub use assembler::ReportAssembler;
pub use name_resolver::resolve_display_name;
pub use service::{conference_record_name, AttendanceReportService, AttendanceTimeline};
