//! Domain types and models
//!
//! Attendance records as they flow through the report pipeline, plus the
//! derived timeline geometry handed to rendering surfaces.

pub mod conference;
pub mod credentials;
pub mod participant;
pub mod report;
pub mod session;
pub mod timeline;

pub use conference::ConferenceRecord;
pub use credentials::AccessToken;
pub use participant::{Participant, ParticipantIdentity};
pub use report::ReportEntry;
pub use session::Session;
pub use timeline::{SessionBar, TimeDomain};
