//! Attendance intervals

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{MeetlineError, Result};

/// One contiguous join-to-leave interval for a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Session {
    /// Build a session, rejecting intervals that end before they start.
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Result<Self> {
        if end_time < start_time {
            return Err(MeetlineError::InvalidInput(format!(
                "session ends ({end_time}) before it starts ({start_time})"
            )));
        }
        Ok(Self { start_time, end_time })
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_session_rejects_inverted_interval() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();

        assert!(matches!(Session::new(start, end), Err(MeetlineError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_length_session_is_valid() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        let session = Session::new(at, at).unwrap();
        assert_eq!(session.duration(), Duration::zero());
    }

    #[test]
    fn test_session_wire_field_names() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        let session = Session::new(start, start + Duration::minutes(30)).unwrap();
        let json = serde_json::to_value(session).unwrap();

        assert_eq!(json["startTime"], "2025-01-15T10:00:00Z");
        assert_eq!(json["endTime"], "2025-01-15T10:30:00Z");
    }
}
