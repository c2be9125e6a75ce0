//! Tests for HTTP controller endpoints and the API router.

mod health;
