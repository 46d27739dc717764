//! Configuration structures.

use alpha_core::{AlphaError, Frequency, TimeInForce};
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub strategy: StrategySettings,
    #[serde(default)]
    pub sizing: SizingSettings,
}

impl AppConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), AlphaError> {
        self.strategy.validate()?;
        self.sizing.validate()
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "alpha-pipeline".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingSettings {
    /// Whether the configured format selects JSON output.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Strategy cycle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    /// Generate protective stop orders alongside market orders
    pub use_stop_losses: bool,
    /// Cap on simultaneously open positions; omit for unlimited
    pub max_open_positions: Option<usize>,
    /// Time in force for generated orders
    pub time_in_force: TimeInForce,
    /// Cycle frequency
    pub frequency: Frequency,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            use_stop_losses: true,
            max_open_positions: None,
            time_in_force: TimeInForce::Opg,
            frequency: Frequency::Daily,
        }
    }
}

impl StrategySettings {
    pub fn validate(&self) -> Result<(), AlphaError> {
        if self.max_open_positions == Some(0) {
            return Err(AlphaError::Config(
                "max_open_positions must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Position sizing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingSettings {
    /// Fraction of portfolio value to lose if a single trade's stop is
    /// hit (0.02 = 2%)
    pub initial_risk: f64,
}

impl Default for SizingSettings {
    fn default() -> Self {
        Self { initial_risk: 0.02 }
    }
}

impl SizingSettings {
    pub fn validate(&self) -> Result<(), AlphaError> {
        if !self.initial_risk.is_finite() || self.initial_risk <= 0.0 || self.initial_risk > 1.0 {
            return Err(AlphaError::Config(format!(
                "initial_risk must be a fraction in (0, 1], got {}",
                self.initial_risk
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.strategy.use_stop_losses);
        assert_eq!(config.strategy.time_in_force, TimeInForce::Opg);
        assert_eq!(config.sizing.initial_risk, 0.02);
    }

    #[test]
    fn test_parse_from_toml() {
        let raw = r#"
            [strategy]
            use_stop_losses = false
            max_open_positions = 25
            time_in_force = "day"
            frequency = "daily"

            [sizing]
            initial_risk = 0.01
        "#;
        let config: AppConfig = toml::from_str(raw).unwrap();
        assert!(!config.strategy.use_stop_losses);
        assert_eq!(config.strategy.max_open_positions, Some(25));
        assert_eq!(config.strategy.time_in_force, TimeInForce::Day);
        assert_eq!(config.sizing.initial_risk, 0.01);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_format_selects_json_output() {
        let mut settings = LoggingSettings::default();
        assert!(!settings.is_json());

        settings.format = "json".to_string();
        assert!(settings.is_json());
        settings.format = "JSON".to_string();
        assert!(settings.is_json());

        settings.format = "plain".to_string();
        assert!(!settings.is_json());
    }

    #[test]
    fn test_invalid_initial_risk_rejected() {
        for invalid in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            let settings = SizingSettings {
                initial_risk: invalid,
            };
            assert!(settings.validate().is_err());
        }
    }

    #[test]
    fn test_zero_position_cap_rejected() {
        let settings = StrategySettings {
            max_open_positions: Some(0),
            ..StrategySettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
