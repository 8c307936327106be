//! Diagnostics on stderr; stdout is reserved for command output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "BALLO_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// `BALLO_LOG` wins, then the config's `[log] filter`, then `warn`.
pub fn init(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .ok()
        .or_else(|| config_filter.and_then(|directive| EnvFilter::try_new(directive).ok()))
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
