//! Runtime settings for the trading core, read from TOML.
//!
//! ```toml
//! fee_rate = 0.05
//! channel_buffer = 32
//! log_level = "info"
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] values.

use crate::receipt::FeeRate;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TradeConfig {
    /// Broker cut applied to every sale.
    pub fee_rate: FeeRate,
    /// Mailbox size of each actor.
    pub channel_buffer: usize,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl TradeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TradeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.fee_rate.is_within_bounds() {
            return Err(ConfigError::InvalidValue(format!(
                "fee_rate must be between 0 and 1, got {}",
                self.fee_rate.value()
            )));
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::InvalidValue("channel_buffer must be positive".into()));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue("log_level cannot be empty".into()));
        }
        Ok(())
    }
}

impl Default for TradeConfig {
    fn default() -> Self {
        Self {
            fee_rate: FeeRate::new(0.05),
            channel_buffer: 32,
            log_level: "info".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TradeConfig::from_toml_str("").unwrap();
        assert_eq!(config, TradeConfig::default());
        assert_eq!(config.fee_rate, FeeRate::new(0.05));
    }

    #[test]
    fn test_partial_document_overrides_keys() {
        let config = TradeConfig::from_toml_str("fee_rate = 0.1\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.fee_rate.value(), 0.1);
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_fee_rate_out_of_range_is_rejected() {
        let err = TradeConfig::from_toml_str("fee_rate = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref m) if m.contains("fee_rate")));

        assert!(TradeConfig::from_toml_str("fee_rate = -0.01").is_err());
        assert!(TradeConfig::from_toml_str("fee_rate = 1.0").is_ok());
    }

    #[test]
    fn test_zero_channel_buffer_is_rejected() {
        let err = TradeConfig::from_toml_str("channel_buffer = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = TradeConfig::from_toml_str("fee_rate = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = TradeConfig::load("/nonexistent/tteok.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile(_)));
    }
}
