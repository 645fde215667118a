//! Conference records used to route to a report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One meeting instance as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceRecord {
    /// Short identifier (last segment of `conferenceRecords/{id}`).
    pub id: String,
    pub start_time: DateTime<Utc>,
    /// Absent while the conference is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}
