//! Configuration management for the accessible spots browser
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::SpotsError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for the accessible spots browser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpotsConfig {
    /// Where the spot catalog comes from
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Duplicate-add notification settings
    #[serde(default)]
    pub notification: NotificationConfig,
    /// Filter control settings
    #[serde(default)]
    pub filters: FilterConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Spot catalog source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog on disk; the bundled catalog is used when unset
    pub path: Option<String>,
}

/// Notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Time a notification stays visible, in milliseconds
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u64,
}

/// Filter control settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Increment used when nudging the minimum rating up or down
    #[serde(default = "default_min_rating_step")]
    pub min_rating_step: f64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_dismiss_ms() -> u64 {
    3000
}

fn default_min_rating_step() -> f64 {
    0.1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_ms: default_dismiss_ms(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_rating_step: default_min_rating_step(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_ms)
    }
}

impl SpotsConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // ACCESSIBLE_SPOTS_NOTIFICATION__DISMISS_MS=5000 and friends
        builder = builder.add_source(
            Environment::with_prefix("ACCESSIBLE_SPOTS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: SpotsConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("accessible-spots").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.catalog.path.as_deref().is_some_and(str::is_empty) {
            self.catalog.path = None;
        }
        if self.notification.dismiss_ms == 0 {
            self.notification.dismiss_ms = default_dismiss_ms();
        }
        if self.filters.min_rating_step == 0.0 {
            self.filters.min_rating_step = default_min_rating_step();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.notification.dismiss_ms > 60_000 {
            return Err(
                SpotsError::config("Notification dismiss delay cannot exceed 60000 ms").into(),
            );
        }

        let step = self.filters.min_rating_step;
        if !step.is_finite() || step <= 0.0 || step > 5.0 {
            return Err(SpotsError::config(format!(
                "Minimum rating step must be within (0, 5], got {step}"
            ))
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SpotsError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SpotsError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SpotsConfig::default();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.notification.dismiss_ms, 3000);
        assert_eq!(config.notification.dismiss_after(), Duration::from_secs(3));
        assert_eq!(config.filters.min_rating_step, 0.1);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = SpotsConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = SpotsConfig::default();
        config.logging.format = "xml".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = SpotsConfig::default();
        config.notification.dismiss_ms = 120_000;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));

        let mut config = SpotsConfig::default();
        config.filters.min_rating_step = 6.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_zeroes() {
        let mut config = SpotsConfig::default();
        config.notification.dismiss_ms = 0;
        config.logging.level = String::new();
        config.catalog.path = Some(String::new());
        config.apply_defaults();
        assert_eq!(config.notification.dismiss_ms, 3000);
        assert_eq!(config.logging.level, "info");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[catalog]\npath = \"data/locations.json\"\n\n[notification]\ndismiss_ms = 1500\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = SpotsConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("data/locations.json"));
        assert_eq!(config.notification.dismiss_ms, 1500);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.filters.min_rating_step, 0.1);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = SpotsConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("accessible-spots"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
