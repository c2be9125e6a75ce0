//! HTTP routing and OpenAPI documentation configuration.
//!
//! API endpoints live under `/api` and are registered here with their OpenAPI
//! specifications. Any other path is left to the Dioxus router, which renders the matching
//! page or its not-found view.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{config::Config, controller};

/// Builds the API router.
///
/// # Registered Endpoints
/// - `GET /api/health` - Report that the API is running
/// - `/api/docs` - Swagger UI, only when [`Config::api_docs`] is enabled
///
/// # Example
/// ```ignore
/// let router = dioxus::server::router(client::App).merge(routes(&config));
/// ```
pub fn routes(config: &Config) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "Artbooth", description = "Artbooth API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Service health"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .split_for_parts();

    if config.api_docs {
        routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
    } else {
        routes
    }
}
