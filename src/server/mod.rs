//! Server application core modules.
//!
//! This module contains the server-side functionality for Artbooth: environment
//! configuration, HTTP error mapping, and the API routes merged next to the server-rendered
//! front end. Every page route is served by the Dioxus router so deep links into the
//! single-page application resolve on reload.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod router;
