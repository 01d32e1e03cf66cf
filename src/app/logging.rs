// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer. Filtering
//! follows `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "video_translate=info";

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(build_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(filter = DEFAULT_FILTER, "logging initialized");
    }
}
