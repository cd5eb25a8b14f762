//! Response DTOs for Web API.

use serde::Serialize;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Store liveness.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Whether the record store answers queries.
    pub db: bool,
}

/// Entry counts.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Number of file entries across all owners.
    pub files: i64,
}
