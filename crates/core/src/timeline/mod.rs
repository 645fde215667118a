//! Timeline computation
//!
//! Derives the shared time domain for a report and places every session on
//! it as a proportional bar.

pub mod domain;
pub mod error;
pub mod layout;
pub mod view;

pub use domain::compute_domain;
pub use error::TimelineError;
pub use layout::layout_session;
pub use view::{
    build_view, NoDataReason, PositionedSession, TickMark, TimelineOutcome, TimelineRow,
    TimelineView,
};
