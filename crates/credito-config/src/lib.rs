//! Configuration management for credito
//!
//! This module handles loading, validation, and management of
//! credito configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Data directory configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Path to the credit-sheet directory
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Main credit-sheet file name
    #[serde(default = "default_main_file")]
    pub main_file: String,
    /// File name used when exporting the annotated sheet
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_main_file() -> String {
    "cartera.csv".to_string()
}

fn default_export_file() -> String {
    "cartera_actualizada.csv".to_string()
}

/// Import behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImportConfig {
    /// Payment cadence assumed when a row has no recognizable "Tipo de pago"
    #[serde(default = "default_frequency")]
    pub default_frequency: String,
}

fn default_frequency() -> String {
    "diario".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaginationConfig {
    /// Records per page for lists
    #[serde(default = "default_records_per_page")]
    pub records_per_page: usize,
}

fn default_records_per_page() -> usize {
    50
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Data directory settings
    #[serde(default)]
    pub data: DataConfig,
    /// Import behavior settings
    #[serde(default)]
    pub import: ImportConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

const KNOWN_FREQUENCIES: [&str; 4] = ["diario", "semanal", "quincenal", "mensual"];
const KNOWN_LOG_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|_| ConfigError::IoError)?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|_| ConfigError::InvalidYaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.records_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.records_per_page".to_string(),
                reason: "Records per page must be greater than 0".to_string(),
            });
        }

        if !KNOWN_FREQUENCIES.contains(&self.import.default_frequency.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "import.default_frequency".to_string(),
                reason: format!(
                    "Frequency must be one of: {}",
                    KNOWN_FREQUENCIES.join(", ")
                ),
            });
        }

        if !KNOWN_LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of: {}", KNOWN_LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Get the full path to the main credit sheet
    pub fn sheet_path(&self) -> PathBuf {
        self.data.path.join(&self.data.main_file)
    }

    /// Get the full path for the exported sheet
    pub fn export_path(&self) -> PathBuf {
        self.data.path.join(&self.data.export_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.main_file, "cartera.csv");
        assert_eq!(config.data.export_file, "cartera_actualizada.csv");
        assert_eq!(config.import.default_frequency, "diario");
        assert_eq!(config.pagination.records_per_page, 50);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.sheet_path(), PathBuf::from("./data/cartera.csv"));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.pagination.records_per_page = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_frequency() {
        let mut config = Config::default();
        config.import.default_frequency = "xyz".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_uppercase_frequency() {
        let mut config = Config::default();
        config.import.default_frequency = "Semanal".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = serde_yaml::from_str(Config::generate_default()).unwrap();
        assert!(config.validate().is_ok());
    }
}
