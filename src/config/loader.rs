use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `petfinder/config.toml` under `dirs::config_dir()`, or the current
    /// directory when no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("petfinder").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - An existing file is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one active pet is allowed per user
    /// - The fallback coordinate is a real position
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_active_pets == 0 {
            return Err(ConfigError::ValidationError {
                message: "limits.max_active_pets must be at least 1".to_string(),
            });
        }

        if !self.location.fallback().is_valid() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Fallback location ({}, {}) is out of range",
                    self.location.fallback_latitude, self.location.fallback_longitude
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.limits.max_active_pets, 2);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let file = write_config("[limits]\nmax_active_pets = 3\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.limits.max_active_pets, 3);
        assert_eq!(config.shop.currency_symbol, "$");
        assert_eq!(config.location.fallback_latitude, -34.610841);
    }

    #[test]
    fn zero_limit_fails_validation() {
        let file = write_config("[limits]\nmax_active_pets = 0\n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn out_of_range_fallback_fails_validation() {
        let file = write_config("[location]\nfallback_latitude = 95.0\n");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("[limits\nmax_active_pets = ");
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn price_uses_currency_symbol() {
        assert_eq!(Config::default().shop.format_price(8500), "$8500");
    }
}
