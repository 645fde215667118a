//! Meet API client implementing the provider ports

use async_trait::async_trait;
use meetline_core::{ConferenceSource, ParticipantSource, SessionSource};
use meetline_domain::constants::CONFERENCE_RECORDS_COLLECTION;
use meetline_domain::{
    AccessToken, ConferenceRecord, MeetApiConfig, MeetlineError, Participant, Result, Session,
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::types::{
    ListConferenceRecordsResponse, ListParticipantSessionsResponse, ListParticipantsResponse, Page,
};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Google Meet v2 client
///
/// Holds no credentials; the caller's token is attached per request.
#[derive(Clone)]
pub struct MeetClient {
    http: HttpClient,
    base_url: String,
    page_size: u32,
}

impl MeetClient {
    /// Create a client against `base_url` (e.g. `https://meet.googleapis.com/v2`).
    pub fn new(http: HttpClient, base_url: &str, page_size: u32) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(InfraError::from)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(MeetlineError::Config(format!(
                "meet API base URL must be http(s), got {base_url}"
            )));
        }

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: page_size.max(1),
        })
    }

    /// Build the HTTP client and Meet client from configuration.
    pub fn from_config(config: &MeetApiConfig) -> Result<Self> {
        let http = HttpClient::from_config(config)?;
        Self::new(http, &config.base_url, config.page_size)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every page of a list endpoint under `path`.
    async fn fetch_all<P>(&self, token: &AccessToken, path: &str) -> Result<Vec<P::Item>>
    where
        P: Page + DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let mut query = vec![("pageSize", self.page_size.to_string())];
            if let Some(page_token) = &page_token {
                query.push(("pageToken", page_token.clone()));
            }

            let page: P = self.http.get_json(&url, token, &query).await?;
            let (batch, next) = page.into_parts();
            pages += 1;
            debug!(path, page = pages, items = batch.len(), "fetched page");
            items.extend(batch);

            match next.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl ConferenceSource for MeetClient {
    #[instrument(skip(self, token))]
    async fn list_conferences(&self, token: &AccessToken) -> Result<Vec<ConferenceRecord>> {
        let records = self
            .fetch_all::<ListConferenceRecordsResponse>(token, CONFERENCE_RECORDS_COLLECTION)
            .await?;
        Ok(records.into_iter().map(ConferenceRecord::from).collect())
    }
}

#[async_trait]
impl ParticipantSource for MeetClient {
    #[instrument(skip(self, token))]
    async fn list_participants(
        &self,
        token: &AccessToken,
        conference: &str,
    ) -> Result<Vec<Participant>> {
        let path = format!("{conference}/participants");
        let participants = self.fetch_all::<ListParticipantsResponse>(token, &path).await?;
        Ok(participants.into_iter().map(Participant::from).collect())
    }
}

#[async_trait]
impl SessionSource for MeetClient {
    #[instrument(skip(self, token))]
    async fn list_sessions(&self, token: &AccessToken, participant: &str) -> Result<Vec<Session>> {
        let path = format!("{participant}/participantSessions");
        let sessions = self.fetch_all::<ListParticipantSessionsResponse>(token, &path).await?;
        sessions.into_iter().map(Session::try_from).collect()
    }
}
