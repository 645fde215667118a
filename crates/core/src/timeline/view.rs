//! Render-ready timeline view
//!
//! Combines the domain and per-session geometry with the axis and tooltip
//! labels a rendering surface needs. Labels are formatted in UTC.

use chrono::{DateTime, Utc};
use meetline_domain::constants::{SESSION_LABEL_FORMAT, TICK_LABEL_FORMAT};
use meetline_domain::{ReportEntry, SessionBar, TimeDomain, TimelineConfig};
use serde::{Deserialize, Serialize};

use super::domain::{check_config, compute_domain};
use super::error::TimelineError;
use super::layout::{layout_session, position_percent};

/// Outcome of building a timeline: either nothing to draw or a full view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum TimelineOutcome {
    NoData { reason: NoDataReason },
    Ready(TimelineView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoDataReason {
    /// The report has no rows at all.
    NoParticipants,
    /// Rows exist but none has a session.
    NoSessions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub domain: TimeDomain,
    pub ticks: Vec<TickMark>,
    pub rows: Vec<TimelineRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickMark {
    pub at: DateTime<Utc>,
    pub position_percent: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    pub display_name: String,
    pub bars: Vec<PositionedSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedSession {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub bar: SessionBar,
    /// `HH:MM:SS - HH:MM:SS`
    pub tooltip: String,
}

/// Build the timeline for an assembled report.
///
/// An empty report or a report without sessions yields
/// [`TimelineOutcome::NoData`]; configuration problems are errors.
pub fn build_view(
    entries: &[ReportEntry],
    config: &TimelineConfig,
) -> Result<TimelineOutcome, TimelineError> {
    check_config(config)?;
    if !config.min_bar_width_percent.is_finite() || config.min_bar_width_percent < 0.0 {
        return Err(TimelineError::InvalidMinBarWidth(config.min_bar_width_percent));
    }
    if entries.is_empty() {
        return Ok(TimelineOutcome::NoData { reason: NoDataReason::NoParticipants });
    }

    let domain = match compute_domain(entries, config) {
        Ok(domain) => domain,
        Err(TimelineError::EmptyDataset) => {
            return Ok(TimelineOutcome::NoData { reason: NoDataReason::NoSessions });
        }
        Err(err) => return Err(err),
    };

    let ticks = domain
        .ticks
        .iter()
        .map(|&at| TickMark {
            at,
            position_percent: position_percent(at, &domain),
            label: at.format(TICK_LABEL_FORMAT).to_string(),
        })
        .collect();

    let rows = entries
        .iter()
        .map(|entry| TimelineRow {
            display_name: entry.display_name.clone(),
            bars: entry
                .sessions
                .iter()
                .map(|session| PositionedSession {
                    start: session.start_time,
                    end: session.end_time,
                    bar: layout_session(session, &domain, config.min_bar_width_percent),
                    tooltip: format!(
                        "{} - {}",
                        session.start_time.format(SESSION_LABEL_FORMAT),
                        session.end_time.format(SESSION_LABEL_FORMAT)
                    ),
                })
                .collect(),
        })
        .collect();

    Ok(TimelineOutcome::Ready(TimelineView { domain, ticks, rows }))
}
