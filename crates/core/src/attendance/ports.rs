//! Port interfaces for the meeting provider
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations. Every call carries the caller's
//! credential explicitly.

use async_trait::async_trait;
use meetline_domain::{AccessToken, ConferenceRecord, Participant, Result, Session};

/// Lists the conferences visible to the caller
#[async_trait]
pub trait ConferenceSource: Send + Sync {
    async fn list_conferences(&self, token: &AccessToken) -> Result<Vec<ConferenceRecord>>;
}

/// Lists the participants of one conference
#[async_trait]
pub trait ParticipantSource: Send + Sync {
    /// `conference` is the full resource name, `conferenceRecords/{id}`.
    async fn list_participants(
        &self,
        token: &AccessToken,
        conference: &str,
    ) -> Result<Vec<Participant>>;
}

/// Lists the sessions of one participant
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// `participant` is the participant resource name.
    async fn list_sessions(&self, token: &AccessToken, participant: &str) -> Result<Vec<Session>>;
}
