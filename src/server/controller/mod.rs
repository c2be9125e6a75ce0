//! HTTP controller endpoints for the Artbooth web API.
//!
//! Axum handlers documented for OpenAPI with utoipa. Page routes are not handled here;
//! they are rendered by the Dioxus router.

pub mod health;
