//! Timeline computation errors

use meetline_domain::MeetlineError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    /// No session exists across the whole report; layout must not be
    /// attempted.
    #[error("no sessions to place on a timeline")]
    EmptyDataset,

    #[error("tick count must be between 2 and 1000, got {0}")]
    InvalidTickCount(usize),

    #[error("padding ratio must be a finite value >= 0, got {0}")]
    InvalidPaddingRatio(f64),

    #[error("minimum bar width must be a finite percentage >= 0, got {0}")]
    InvalidMinBarWidth(f64),

    #[error("padded time domain is outside the representable range")]
    DomainOutOfRange,
}

impl From<TimelineError> for MeetlineError {
    fn from(value: TimelineError) -> Self {
        match value {
            TimelineError::DomainOutOfRange => MeetlineError::Internal(value.to_string()),
            other => MeetlineError::InvalidInput(other.to_string()),
        }
    }
}
