//! Response bodies owned by the HTTP layer.
//!
//! Report and timeline payloads are the core types serialized directly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
