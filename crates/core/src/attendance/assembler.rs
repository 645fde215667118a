//! Report assembly: participants joined with their sessions
//!
//! Session retrieval is scattered across tasks and gathered positionally, so
//! the report keeps the provider's participant order no matter which request
//! finishes first. The first failure aborts the remaining retrievals and
//! fails the whole report.

use std::sync::Arc;

use meetline_domain::constants::DEFAULT_MAX_CONCURRENT_FETCHES;
use meetline_domain::{AccessToken, MeetlineError, Participant, ReportEntry, Result, Session};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, instrument};

use super::name_resolver::resolve_display_name;
use super::ports::SessionSource;

/// Participant that can be joined to its sessions.
struct Identified {
    resource: String,
    display_name: String,
}

/// Builds report entries from participants and a session source
#[derive(Clone)]
pub struct ReportAssembler {
    sessions: Arc<dyn SessionSource>,
    max_concurrent: usize,
}

impl ReportAssembler {
    pub fn new(sessions: Arc<dyn SessionSource>) -> Self {
        Self { sessions, max_concurrent: DEFAULT_MAX_CONCURRENT_FETCHES }
    }

    /// Cap the number of in-flight session retrievals (minimum 1).
    pub fn with_max_concurrency(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Assemble one report entry per identifiable participant, in input
    /// order.
    ///
    /// Participants without a resource name are dropped: they cannot be
    /// joined to their sessions.
    #[instrument(skip_all, fields(participants = participants.len()))]
    pub async fn assemble(
        &self,
        token: &AccessToken,
        participants: Vec<Participant>,
    ) -> Result<Vec<ReportEntry>> {
        let identified = identify(participants);
        let mut slots = self.gather_sessions(token, &identified).await?;

        identified
            .into_iter()
            .zip(slots.iter_mut())
            .map(|(participant, slot)| {
                let sessions = slot.take().ok_or_else(|| {
                    MeetlineError::Internal(format!(
                        "no session result gathered for {}",
                        participant.resource
                    ))
                })?;
                Ok(ReportEntry::new(participant.display_name, sessions))
            })
            .collect()
    }

    async fn gather_sessions(
        &self,
        token: &AccessToken,
        identified: &[Identified],
    ) -> Result<Vec<Option<Vec<Session>>>> {
        let mut slots: Vec<Option<Vec<Session>>> = vec![None; identified.len()];
        let limiter = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();

        for (index, participant) in identified.iter().enumerate() {
            let source = Arc::clone(&self.sessions);
            let limiter = Arc::clone(&limiter);
            let token = token.clone();
            let resource = participant.resource.clone();

            tasks.spawn(async move {
                let _permit = limiter.acquire_owned().await.map_err(|_| {
                    MeetlineError::Internal("session retrieval limiter closed".into())
                })?;
                let sessions = source.list_sessions(&token, &resource).await?;
                Ok::<_, MeetlineError>((index, sessions))
            });
        }

        // Returning early drops the JoinSet, which aborts outstanding tasks.
        while let Some(joined) = tasks.join_next().await {
            let (index, sessions) = joined.map_err(|err| {
                MeetlineError::Internal(format!("session retrieval task failed: {err}"))
            })??;
            slots[index] = Some(sessions);
        }

        Ok(slots)
    }
}

fn identify(participants: Vec<Participant>) -> Vec<Identified> {
    participants
        .into_iter()
        .enumerate()
        .filter_map(|(position, participant)| match participant.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Some(Identified {
                resource: name.to_string(),
                display_name: resolve_display_name(&participant),
            }),
            _ => {
                debug!(position, "dropping participant without a resource name");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use meetline_domain::ParticipantIdentity;

    use super::*;

    #[derive(Default)]
    struct StaticSessions {
        sessions: HashMap<String, Vec<Session>>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SessionSource for StaticSessions {
        async fn list_sessions(
            &self,
            _token: &AccessToken,
            participant: &str,
        ) -> Result<Vec<Session>> {
            self.calls.lock().unwrap().push(participant.to_string());
            self.sessions
                .get(participant)
                .cloned()
                .ok_or_else(|| MeetlineError::NotFound(participant.to_string()))
        }
    }

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap()
    }

    fn session(start_min: u32, end_min: u32) -> Session {
        Session::new(
            Utc.with_ymd_and_hms(2025, 1, 15, 10, start_min, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 15, 10, end_min, 0).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_alice_and_path_fallback_scenario() {
        let mut sessions = HashMap::new();
        sessions.insert("p/1".to_string(), vec![session(0, 30)]);
        sessions.insert("p/2".to_string(), Vec::new());
        let source = Arc::new(StaticSessions { sessions, ..Default::default() });

        let participants = vec![
            Participant::new(
                "p/1",
                ParticipantIdentity::SignedIn { display_name: Some("Alice".into()), user_key: None },
            ),
            Participant::new("p/2", ParticipantIdentity::Unidentified),
        ];

        let report = ReportAssembler::new(source).assemble(&token(), participants).await.unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].display_name, "Alice");
        assert_eq!(report[0].sessions, vec![session(0, 30)]);
        assert_eq!(report[1].display_name, "2");
        assert!(report[1].sessions.is_empty());
    }

    #[tokio::test]
    async fn test_participants_without_name_are_dropped_without_fetching() {
        let mut sessions = HashMap::new();
        sessions.insert("p/1".to_string(), vec![session(0, 5)]);
        let source = Arc::new(StaticSessions { sessions, ..Default::default() });

        let participants = vec![
            Participant { name: None, identity: ParticipantIdentity::Phone { display_name: None } },
            Participant::new("p/1", ParticipantIdentity::Anonymous { display_name: None }),
            Participant { name: Some("  ".into()), identity: ParticipantIdentity::Unidentified },
        ];

        let report = ReportAssembler::new(source.clone())
            .assemble(&token(), participants)
            .await
            .unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].display_name, "Anonymous");
        assert_eq!(*source.calls.lock().unwrap(), vec!["p/1".to_string()]);
    }

    #[tokio::test]
    async fn test_single_retrieval_failure_fails_whole_report() {
        let mut sessions = HashMap::new();
        sessions.insert("p/1".to_string(), vec![session(0, 5)]);
        let source = Arc::new(StaticSessions { sessions, ..Default::default() });

        let participants = vec![
            Participant::new("p/1", ParticipantIdentity::Unidentified),
            Participant::new("p/missing", ParticipantIdentity::Unidentified),
        ];

        let result = ReportAssembler::new(source).assemble(&token(), participants).await;
        assert!(matches!(result, Err(MeetlineError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_no_participants_yields_empty_report() {
        let source = Arc::new(StaticSessions::default());
        let report = ReportAssembler::new(source).assemble(&token(), Vec::new()).await.unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_concurrency_floor_is_one() {
        let assembler =
            ReportAssembler::new(Arc::new(StaticSessions::default())).with_max_concurrency(0);
        assert_eq!(assembler.max_concurrent, 1);
    }
}
