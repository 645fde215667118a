//! Participant identity records

use serde::{Deserialize, Serialize};

/// One identity that joined a conference, possibly across several sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Provider resource path, e.g. `conferenceRecords/abc/participants/123`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub identity: ParticipantIdentity,
}

impl Participant {
    pub fn new(name: impl Into<String>, identity: ParticipantIdentity) -> Self {
        Self { name: Some(name.into()), identity }
    }

    /// Last non-empty segment of the resource path (the stable short id).
    pub fn short_id(&self) -> Option<&str> {
        self.name.as_deref()?.rsplit('/').find(|segment| !segment.trim().is_empty())
    }
}

/// The mutually exclusive ways a participant can be identified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ParticipantIdentity {
    SignedIn { display_name: Option<String>, user_key: Option<String> },
    Anonymous { display_name: Option<String> },
    Phone { display_name: Option<String> },
    #[default]
    Unidentified,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_uses_last_segment() {
        let participant = Participant::new(
            "conferenceRecords/abc/participants/123",
            ParticipantIdentity::Unidentified,
        );
        assert_eq!(participant.short_id(), Some("123"));
    }

    #[test]
    fn test_short_id_skips_trailing_slash() {
        let participant = Participant::new("p/42/", ParticipantIdentity::Unidentified);
        assert_eq!(participant.short_id(), Some("42"));

        let blank = Participant::new("///", ParticipantIdentity::Unidentified);
        assert_eq!(blank.short_id(), None);
    }

    #[test]
    fn test_identity_serializes_with_kind_tag() {
        let identity = ParticipantIdentity::SignedIn {
            display_name: Some("Alice".into()),
            user_key: Some("users/1".into()),
        };
        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(json["kind"], "signedIn");
        assert_eq!(json["displayName"], "Alice");
        assert_eq!(json["userKey"], "users/1");
    }
}
