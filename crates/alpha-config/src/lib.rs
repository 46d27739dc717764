//! Configuration management and logging setup.

mod logging;
mod settings;

pub use logging::setup_logging;
pub use settings::{AppConfig, AppSettings, LoggingSettings, SizingSettings, StrategySettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables prefixed with `ALPHA` override file values,
/// e.g. `ALPHA__SIZING__INITIAL_RISK=0.01`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("ALPHA")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
