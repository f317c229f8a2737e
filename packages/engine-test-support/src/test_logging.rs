//! Test logging shared by the engine's unit and integration tests.
//!
//! Level precedence: `TEST_LOG`, then `RUST_LOG`, then `"warn"`. Output goes
//! through the test writer so cargo captures it per test. Set
//! `TEST_LOG_JSON=1` to see the engine's structured fields (`round`, `seat`,
//! `attempt`, `kind`) as JSON instead of text.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn json_requested() -> bool {
    std::env::var("TEST_LOG_JSON")
        .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Idempotent and race-safe.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let builder = fmt()
            .with_env_filter(filter())
            .with_test_writer()
            .without_time()
            .with_target(false);
        if json_requested() {
            builder.json().flatten_event(true).try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}
