//! Error types for the Artbooth server.
//!
//! Errors use `thiserror` for ergonomic definitions with automatic `Display` and `Error`
//! trait implementations.

pub mod config;

pub use config::ConfigError;
