//! Tests for the client bootstrap.

mod bootstrap;
