//! Derived timeline geometry

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Padded time window and tick set shared by every bar of a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeDomain {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Evenly spaced, `ticks[0] == start` and the last tick equals `end`.
    pub ticks: Vec<DateTime<Utc>>,
}

impl TimeDomain {
    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}

/// Horizontal placement of one session, in percent of the domain span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBar {
    pub left_fraction: f64,
    pub width_fraction: f64,
}

impl SessionBar {
    pub fn right_edge(&self) -> f64 {
        self.left_fraction + self.width_fraction
    }
}
