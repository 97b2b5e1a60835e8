// ABOUTME: Tracing initialisation shared by the GeoLens binaries.
// ABOUTME: Logs go to stderr so report output on stdout stays machine-readable.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default verbosity when `RUST_LOG` is not set.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Initialise the global tracing subscriber.
///
/// `json` switches to newline-delimited JSON log lines. `RUST_LOG` overrides
/// `level`. Only the first call in a process takes effect.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}
