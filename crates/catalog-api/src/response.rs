//! Shared response types

use serde::Serialize;

/// Body returned by every delete endpoint, row or no row.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}
