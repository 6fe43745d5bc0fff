//! Stderr tracing for both fixture binaries.
//!
//! The harness diffs stdout, so nothing here ever writes to it. Useful
//! targets: `fixtures::sequence` emits a `hand-off` event per channel send
//! and a `print` event per line; `fixtures::recursive` emits `print` only.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Call once, first thing in `main`.
///
/// ```bash
/// RUST_LOG=fixtures=trace cargo run --bin sequence-generator -- --count 3
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_names(true)
                .compact(),
        )
        .init();
}
