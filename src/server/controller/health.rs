use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// OpenAPI tag for service health routes.
pub static HEALTH_TAG: &str = "health";

/// Message returned while the API is serving requests.
pub const RUNNING_MESSAGE: &str = "API is running";

/// Reports that the API is up
///
/// # Responses
/// - 200 (Success): The API is running, includes the server version
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is running", body = HealthDto),
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            message: RUNNING_MESSAGE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
