//! HTTP handlers for the REST API.
//!
//! Each handler forwards the caller's credential to the report service.

use axum::extract::{Path, State};
use axum::Json;
use meetline_core::{conference_record_name, AttendanceTimeline};
use meetline_domain::{ConferenceRecord, ReportEntry};

use super::auth::BearerToken;
use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Reports
// =============================================================================

/// GET /api/conferences
pub async fn list_conferences(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> HandlerResult<Vec<ConferenceRecord>> {
    let conferences = state.reports.list_conferences(&token).await?;
    Ok(Json(conferences))
}

/// GET /api/report/{conference_id}
pub async fn get_report(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(conference_id): Path<String>,
) -> HandlerResult<Vec<ReportEntry>> {
    check_conference_id(&conference_id)?;
    let entries = state.reports.build_report(&token, &conference_id).await?;
    Ok(Json(entries))
}

/// GET /api/report/{conference_id}/timeline
pub async fn get_timeline(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(conference_id): Path<String>,
) -> HandlerResult<AttendanceTimeline> {
    check_conference_id(&conference_id)?;
    let timeline = state.reports.build_timeline(&token, &conference_id, &state.timeline).await?;
    Ok(Json(timeline))
}

fn check_conference_id(conference_id: &str) -> Result<(), AppError> {
    conference_record_name(conference_id)
        .map(|_| ())
        .map_err(|err| AppError::BadRequest(err.to_string()))
}
