//! Conversions from external infrastructure errors into domain errors.

use meetline_domain::MeetlineError;
use reqwest::Error as HttpError;
use reqwest::StatusCode;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MeetlineError);

impl From<InfraError> for MeetlineError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MeetlineError> for InfraError {
    fn from(value: MeetlineError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMeetlineError {
    fn into_meetline(self) -> MeetlineError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MeetlineError */
/* -------------------------------------------------------------------------- */

impl IntoMeetlineError for HttpError {
    fn into_meetline(self) -> MeetlineError {
        if self.is_timeout() {
            return MeetlineError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return MeetlineError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return status_error(status, None);
        }

        if self.is_decode() {
            return MeetlineError::InvalidInput(format!("failed to decode HTTP response: {self}"));
        }

        MeetlineError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_meetline())
    }
}

/// Map a non-success HTTP status (and optional response body) to a domain
/// error.
pub fn status_error(status: StatusCode, body: Option<&str>) -> MeetlineError {
    let code = status.as_u16();
    let mut message =
        format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
    if let Some(body) = body.map(str::trim).filter(|b| !b.is_empty()) {
        message.push_str(": ");
        message.push_str(body);
    }

    match code {
        401 | 403 => MeetlineError::Auth(message),
        404 => MeetlineError::NotFound(message),
        429 => MeetlineError::Network(message),
        400..=499 => MeetlineError::InvalidInput(message),
        _ => MeetlineError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → MeetlineError */
/* -------------------------------------------------------------------------- */

impl IntoMeetlineError for JsonError {
    fn into_meetline(self) -> MeetlineError {
        MeetlineError::InvalidInput(format!("malformed JSON payload: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_meetline())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → MeetlineError */
/* -------------------------------------------------------------------------- */

impl IntoMeetlineError for UrlError {
    fn into_meetline(self) -> MeetlineError {
        MeetlineError::Config(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_meetline())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
