//! Assembled attendance report rows

use serde::{Deserialize, Serialize};

use super::session::Session;

/// One participant row of an attendance report.
///
/// After assembly only the human label survives; the provider resource path
/// is not carried downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub display_name: String,
    /// Provider order, not necessarily sorted by time.
    pub sessions: Vec<Session>,
}

impl ReportEntry {
    pub fn new(display_name: impl Into<String>, sessions: Vec<Session>) -> Self {
        Self { display_name: display_name.into(), sessions }
    }
}
