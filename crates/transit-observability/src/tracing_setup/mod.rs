//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;
use transit_core::config::{LogFormat, ObservabilityConfig};
use transit_core::constants::LOG_ENV_VAR;

/// Initialize the global tracing subscriber.
///
/// `TRANSIT_LOG` takes precedence over `log_level`. Output goes to stderr.
/// Returns false if a subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.log_format)
}

/// Initialize tracing with a custom filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str, format: LogFormat) -> bool {
    install(EnvFilter::new(filter), format)
}

fn install(filter: EnvFilter, format: LogFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => builder
            .json()
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    result.is_ok()
}
