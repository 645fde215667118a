//! Attendance report service - core business logic
//!
//! Composes the provider ports into the report-request operations. All state
//! is request-scoped: the credential arrives as a parameter and nothing is
//! cached between calls.

use std::sync::Arc;

use meetline_domain::constants::CONFERENCE_RECORDS_COLLECTION;
use meetline_domain::{
    AccessToken, ConferenceRecord, MeetlineError, ReportEntry, Result, TimelineConfig,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::assembler::ReportAssembler;
use super::ports::{ConferenceSource, ParticipantSource, SessionSource};
use crate::timeline::{build_view, TimelineOutcome};

/// Report rows together with their computed timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceTimeline {
    pub entries: Vec<ReportEntry>,
    pub timeline: TimelineOutcome,
}

/// Attendance report service
pub struct AttendanceReportService {
    conferences: Arc<dyn ConferenceSource>,
    participants: Arc<dyn ParticipantSource>,
    assembler: ReportAssembler,
}

impl AttendanceReportService {
    /// Create a new report service
    pub fn new(
        conferences: Arc<dyn ConferenceSource>,
        participants: Arc<dyn ParticipantSource>,
        sessions: Arc<dyn SessionSource>,
    ) -> Self {
        Self { conferences, participants, assembler: ReportAssembler::new(sessions) }
    }

    /// Cap concurrent session retrievals per report.
    pub fn with_max_concurrency(mut self, max_concurrent: usize) -> Self {
        self.assembler = self.assembler.with_max_concurrency(max_concurrent);
        self
    }

    /// Conferences visible to the caller
    #[instrument(skip(self, token))]
    pub async fn list_conferences(&self, token: &AccessToken) -> Result<Vec<ConferenceRecord>> {
        self.conferences.list_conferences(token).await
    }

    /// Assemble the attendance report for one conference
    ///
    /// Any retrieval failure fails the whole report; no partial report is
    /// returned.
    #[instrument(skip(self, token))]
    pub async fn build_report(
        &self,
        token: &AccessToken,
        conference_id: &str,
    ) -> Result<Vec<ReportEntry>> {
        let conference = conference_record_name(conference_id)?;
        let participants = self.participants.list_participants(token, &conference).await?;
        let fetched = participants.len();

        let entries = self.assembler.assemble(token, participants).await?;

        info!(
            conference = %conference,
            participants = fetched,
            kept = entries.len(),
            sessions = entries.iter().map(|e| e.sessions.len()).sum::<usize>(),
            "attendance report assembled"
        );
        Ok(entries)
    }

    /// Assemble the report and lay it out on a shared timeline
    pub async fn build_timeline(
        &self,
        token: &AccessToken,
        conference_id: &str,
        config: &TimelineConfig,
    ) -> Result<AttendanceTimeline> {
        let entries = self.build_report(token, conference_id).await?;
        let timeline = build_view(&entries, config)?;
        Ok(AttendanceTimeline { entries, timeline })
    }
}

/// Full resource name (`conferenceRecords/{id}`) for a short conference id.
pub fn conference_record_name(conference_id: &str) -> Result<String> {
    let id = conference_id.trim();
    if id.is_empty() || id.contains('/') {
        return Err(MeetlineError::InvalidInput(format!(
            "invalid conference id: {conference_id:?}"
        )));
    }
    Ok(format!("{CONFERENCE_RECORDS_COLLECTION}/{id}"))
}
