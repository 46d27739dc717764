//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::settings::LoggingSettings;

/// Install the global subscriber from the logging settings.
///
/// `RUST_LOG` overrides the configured level when set. A `format` of
/// `"json"` selects structured output; anything else renders
/// human-readable.
pub fn setup_logging(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let registry = tracing_subscriber::registry().with(filter);
    if settings.is_json() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }
}
