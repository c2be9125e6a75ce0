use serde::{Deserialize, Serialize};

/// The response of the API health check
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HealthDto {
    /// Human readable status, `"API is running"` when healthy
    pub message: String,
    /// Version of the running server
    pub version: String,
}
