use artbooth::{
    model::api::HealthDto,
    server::{
        config::Config,
        controller::health::{health, RUNNING_MESSAGE},
        router::routes,
    },
};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;

const BODY_LIMIT: usize = 64 * 1024;

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
/// Expect 200 with the running message and crate version
async fn health_reports_running() {
    let response = health().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body: HealthDto = read_json(response).await;
    assert_eq!(body.message, RUNNING_MESSAGE);
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
/// Expect the router to serve the health endpoint
async fn router_serves_health() {
    let response = routes(&Config::default())
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: HealthDto = read_json(response).await;
    assert_eq!(body.message, "API is running");
}

#[tokio::test]
/// Expect the OpenAPI document to list the health endpoint when docs are enabled
async fn router_serves_openapi_when_enabled() {
    let response = routes(&Config::default())
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = read_json(response).await;
    assert!(doc["paths"].get("/api/health").is_some());
}

#[tokio::test]
/// Expect no docs route when docs are disabled
async fn router_hides_docs_when_disabled() {
    let config = Config {
        api_docs: false,
        ..Config::default()
    };

    let response = routes(&config)
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
