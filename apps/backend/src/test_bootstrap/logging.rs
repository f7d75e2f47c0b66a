//! Test logging for unit tests inside this crate.
//!
//! Delegates to the shared `backend-test-support` package so unit and
//! integration tests install the same subscriber. Level is controlled by
//! `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.
//!
//! ```bash
//! TEST_LOG=debug cargo test -p whist-backend -- --nocapture
//! ```

pub fn init() {
    backend_test_support::logging::init();
}
