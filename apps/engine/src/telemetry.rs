//! Subscriber setup for binaries that embed the engine.
//!
//! The engine itself only emits `tracing` events with `round`, `seat`,
//! `attempt` and `kind` fields; installing a subscriber is up to the caller.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, fields flattened in.
    #[default]
    Json,
    /// Single-line human output.
    Compact,
}

/// JSON logs to stdout; `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_FILTER, LogFormat::Json);
}

/// Install a global subscriber; `RUST_LOG` wins over `default_filter`.
///
/// A second call is a no-op.
pub fn init_tracing_with(default_filter: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_ansi(false)
                    .json()
                    .flatten_event(true),
            )
            .try_init()
            .ok(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_target(false).compact())
            .try_init()
            .ok(),
    };
}
