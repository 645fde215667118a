//! Shared helpers for `meetline-api` route tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use meetline_api::{create_router, AppState};
use meetline_core::{AttendanceReportService, ConferenceSource, ParticipantSource, SessionSource};
use meetline_domain::{
    AccessToken, ConferenceRecord, MeetlineError, Participant, ParticipantIdentity,
    Result as DomainResult, Session, TimelineConfig,
};
use serde_json::Value;

pub const CONFERENCE: &str = "conferenceRecords/abc";

/// Provider with one conference and two participants; remembers the
/// credentials it was called with.
#[derive(Default, Clone)]
pub struct StubProvider {
    pub fail_sessions: bool,
    pub seen_tokens: Arc<Mutex<Vec<String>>>,
}

impl StubProvider {
    fn record(&self, token: &AccessToken) {
        self.seen_tokens.lock().unwrap().push(token.secret().to_string());
    }
}

#[async_trait]
impl ConferenceSource for StubProvider {
    async fn list_conferences(&self, token: &AccessToken) -> DomainResult<Vec<ConferenceRecord>> {
        self.record(token);
        Ok(vec![ConferenceRecord {
            id: "abc".into(),
            start_time: Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap(),
            end_time: None,
        }])
    }
}

#[async_trait]
impl ParticipantSource for StubProvider {
    async fn list_participants(
        &self,
        token: &AccessToken,
        conference: &str,
    ) -> DomainResult<Vec<Participant>> {
        self.record(token);
        if conference != CONFERENCE {
            return Err(MeetlineError::NotFound(conference.to_string()));
        }
        Ok(vec![
            Participant::new(
                format!("{CONFERENCE}/participants/1"),
                ParticipantIdentity::SignedIn {
                    display_name: Some("Alice".into()),
                    user_key: None,
                },
            ),
            Participant::new(
                format!("{CONFERENCE}/participants/2"),
                ParticipantIdentity::Phone { display_name: None },
            ),
        ])
    }
}

#[async_trait]
impl SessionSource for StubProvider {
    async fn list_sessions(
        &self,
        token: &AccessToken,
        participant: &str,
    ) -> DomainResult<Vec<Session>> {
        self.record(token);
        if self.fail_sessions {
            return Err(MeetlineError::Network("upstream unavailable".into()));
        }
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let session = if participant.ends_with("/1") {
            Session::new(start, start + chrono::Duration::minutes(10))
        } else {
            Session::new(
                start + chrono::Duration::minutes(30),
                start + chrono::Duration::minutes(40),
            )
        };
        Ok(vec![session.unwrap()])
    }
}

pub fn router(provider: StubProvider) -> Router {
    let provider = Arc::new(provider);
    let service =
        AttendanceReportService::new(provider.clone(), provider.clone(), provider.clone());
    create_router(AppState::new(Arc::new(service), TimelineConfig::default()))
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
