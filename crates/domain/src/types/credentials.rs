//! Caller credentials passed explicitly into report requests

use std::fmt;

use crate::{MeetlineError, Result};

/// Bearer token authorizing calls against the meeting provider.
///
/// The token is supplied per request by the caller; nothing in the report
/// pipeline stores it. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token, rejecting blank values.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(MeetlineError::Auth("access token is empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Raw token value for the `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
