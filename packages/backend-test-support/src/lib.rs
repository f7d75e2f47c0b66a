//! Shared test bootstrap for the whist backend.
//!
//! Unit tests inside `whist-backend` and every integration test binary install
//! the same tracing subscriber through [`logging::init`].

pub mod logging;
