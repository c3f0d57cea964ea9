//! Subscriber setup for binaries and tests embedding the library.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins over `config.log_level`; an unparsable directive falls
/// back to `info`. Returns false if a global subscriber was already set.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_LEVEL));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        ::tracing::debug!(level = %config.log_level, json = config.json, "Tracing initialized");
    }
    installed
}
