//! One-time tracing subscriber for tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber. Safe to call from any number of tests.
///
/// Level precedence: `TEST_LOG`, then `RUST_LOG`, then `warn`.
/// Setting `TEST_LOG_JSON=1` switches to the same JSON line format the server
/// binary emits, which is handy when diffing scheduler traces.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let json = std::env::var("TEST_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false);

        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}
