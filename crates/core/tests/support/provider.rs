use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use meetline_core::{ConferenceSource, ParticipantSource, SessionSource};
use meetline_domain::{
    AccessToken, ConferenceRecord, MeetlineError, Participant, Result as DomainResult, Session,
};

/// In-memory meeting provider.
///
/// Each participant's session list can be delayed or made to fail, which lets
/// tests control the completion order of concurrent retrievals.
#[derive(Default, Clone)]
pub struct MockMeetProvider {
    conferences: Vec<ConferenceRecord>,
    participants: HashMap<String, Vec<Participant>>,
    sessions: HashMap<String, Vec<Session>>,
    delays: HashMap<String, Duration>,
    failing: Vec<String>,
    completed: Arc<Mutex<Vec<String>>>,
}

impl MockMeetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conference(mut self, record: ConferenceRecord) -> Self {
        self.conferences.push(record);
        self
    }

    pub fn with_participants(mut self, conference: &str, participants: Vec<Participant>) -> Self {
        self.participants.insert(conference.to_string(), participants);
        self
    }

    pub fn with_sessions(mut self, participant: &str, sessions: Vec<Session>) -> Self {
        self.sessions.insert(participant.to_string(), sessions);
        self
    }

    pub fn with_delay(mut self, participant: &str, delay: Duration) -> Self {
        self.delays.insert(participant.to_string(), delay);
        self
    }

    pub fn failing_for(mut self, participant: &str) -> Self {
        self.failing.push(participant.to_string());
        self
    }

    /// Participant resources in the order their retrievals finished.
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConferenceSource for MockMeetProvider {
    async fn list_conferences(&self, _token: &AccessToken) -> DomainResult<Vec<ConferenceRecord>> {
        Ok(self.conferences.clone())
    }
}

#[async_trait]
impl ParticipantSource for MockMeetProvider {
    async fn list_participants(
        &self,
        _token: &AccessToken,
        conference: &str,
    ) -> DomainResult<Vec<Participant>> {
        self.participants
            .get(conference)
            .cloned()
            .ok_or_else(|| MeetlineError::NotFound(conference.to_string()))
    }
}

#[async_trait]
impl SessionSource for MockMeetProvider {
    async fn list_sessions(
        &self,
        _token: &AccessToken,
        participant: &str,
    ) -> DomainResult<Vec<Session>> {
        if let Some(delay) = self.delays.get(participant) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.iter().any(|p| p == participant) {
            return Err(MeetlineError::Network(format!("upstream failure for {participant}")));
        }
        self.completed.lock().unwrap().push(participant.to_string());
        Ok(self.sessions.get(participant).cloned().unwrap_or_default())
    }
}
