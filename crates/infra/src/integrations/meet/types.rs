//! Meet v2 wire types and their conversion into domain records
//!
//! The wire shapes are kept private to the integration; only domain types
//! leave this module.

use chrono::{DateTime, Utc};
use meetline_domain::{
    ConferenceRecord, MeetlineError, Participant, ParticipantIdentity, Result, Session,
};
use serde::Deserialize;
use tracing::warn;

/// A page of a list endpoint: the items plus the token for the next page.
pub trait Page {
    type Item;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConferenceRecordsResponse {
    #[serde(default)]
    pub conference_records: Vec<WireConferenceRecord>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParticipantsResponse {
    #[serde(default)]
    pub participants: Vec<WireParticipant>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParticipantSessionsResponse {
    #[serde(default)]
    pub participant_sessions: Vec<WireParticipantSession>,
    pub next_page_token: Option<String>,
}

impl Page for ListConferenceRecordsResponse {
    type Item = WireConferenceRecord;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.conference_records, self.next_page_token)
    }
}

impl Page for ListParticipantsResponse {
    type Item = WireParticipant;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.participants, self.next_page_token)
    }
}

impl Page for ListParticipantSessionsResponse {
    type Item = WireParticipantSession;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.participant_sessions, self.next_page_token)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireConferenceRecord {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireParticipant {
    pub name: Option<String>,
    pub signedin_user: Option<WireSignedInUser>,
    pub anonymous_user: Option<WireNamedUser>,
    pub phone_user: Option<WireNamedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSignedInUser {
    pub user: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireNamedUser {
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireParticipantSession {
    pub name: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl From<WireConferenceRecord> for ConferenceRecord {
    fn from(record: WireConferenceRecord) -> Self {
        let id = record
            .name
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(record.name.as_str())
            .to_string();
        ConferenceRecord { id, start_time: record.start_time, end_time: record.end_time }
    }
}

impl From<WireParticipant> for Participant {
    fn from(wire: WireParticipant) -> Self {
        let variants = usize::from(wire.signedin_user.is_some())
            + usize::from(wire.anonymous_user.is_some())
            + usize::from(wire.phone_user.is_some());
        if variants > 1 {
            warn!(
                participant = wire.name.as_deref().unwrap_or_default(),
                variants, "participant carries several identity kinds, using the first by precedence"
            );
        }

        let identity = if let Some(user) = wire.signedin_user {
            ParticipantIdentity::SignedIn {
                display_name: present(user.display_name),
                user_key: present(user.user),
            }
        } else if let Some(user) = wire.anonymous_user {
            ParticipantIdentity::Anonymous { display_name: present(user.display_name) }
        } else if let Some(user) = wire.phone_user {
            ParticipantIdentity::Phone { display_name: present(user.display_name) }
        } else {
            ParticipantIdentity::Unidentified
        };

        Participant { name: present(wire.name), identity }
    }
}

impl TryFrom<WireParticipantSession> for Session {
    type Error = MeetlineError;

    /// Sessions still in progress have no end time and are rejected.
    fn try_from(wire: WireParticipantSession) -> Result<Self> {
        let end_time = wire.end_time.ok_or_else(|| {
            MeetlineError::InvalidInput(format!(
                "participant session {} has no end time",
                wire.name.as_deref().unwrap_or("<unnamed>")
            ))
        })?;
        Session::new(wire.start_time, end_time)
    }
}

/// Empty strings on the wire are treated as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_conference_id_is_last_segment() {
        let wire: WireConferenceRecord = serde_json::from_str(
            r#"{"name":"conferenceRecords/abc-123","startTime":"2025-01-15T09:00:00Z"}"#,
        )
        .unwrap();
        let record = ConferenceRecord::from(wire);

        assert_eq!(record.id, "abc-123");
        assert_eq!(record.end_time, None);
    }

    #[test]
    fn test_participant_identity_precedence() {
        let wire: WireParticipant = serde_json::from_str(
            r#"{
                "name": "conferenceRecords/c/participants/1",
                "anonymousUser": {"displayName": "Guest"},
                "signedinUser": {"user": "users/9", "displayName": "Alice"}
            }"#,
        )
        .unwrap();
        let participant = Participant::from(wire);

        assert_eq!(
            participant.identity,
            ParticipantIdentity::SignedIn {
                display_name: Some("Alice".into()),
                user_key: Some("users/9".into()),
            }
        );
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let wire: WireParticipant = serde_json::from_str(
            r#"{"name": "", "phoneUser": {"displayName": ""}}"#,
        )
        .unwrap();
        let participant = Participant::from(wire);

        assert_eq!(participant.name, None);
        assert_eq!(participant.identity, ParticipantIdentity::Phone { display_name: None });
    }

    #[test]
    fn test_participant_without_identity_is_unidentified() {
        let wire: WireParticipant =
            serde_json::from_str(r#"{"name": "conferenceRecords/c/participants/7"}"#).unwrap();
        assert_eq!(Participant::from(wire).identity, ParticipantIdentity::Unidentified);
    }

    #[test]
    fn test_open_session_is_rejected() {
        let wire: WireParticipantSession =
            serde_json::from_str(r#"{"name":"s/1","startTime":"2025-01-15T09:00:00Z"}"#).unwrap();
        assert!(matches!(Session::try_from(wire), Err(MeetlineError::InvalidInput(_))));
    }

    #[test]
    fn test_closed_session_converts() {
        let wire: WireParticipantSession = serde_json::from_str(
            r#"{"startTime":"2025-01-15T09:00:00Z","endTime":"2025-01-15T09:10:00.500Z"}"#,
        )
        .unwrap();
        let session = Session::try_from(wire).unwrap();

        assert_eq!(session.start_time, Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap());
        assert_eq!(session.duration().num_milliseconds(), 600_500);
    }

    #[test]
    fn test_missing_collection_defaults_to_empty_page() {
        let page: ListParticipantsResponse = serde_json::from_str("{}").unwrap();
        let (items, next) = page.into_parts();
        assert!(items.is_empty());
        assert!(next.is_none());
    }
}
