//! Configuration management for custdash
//!
//! This module handles loading, validation, and management of
//! custdash configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

/// Dataset file configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Path to the data directory
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Dataset document file name
    #[serde(default = "default_dataset_file")]
    pub file: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_dataset_file() -> String {
    "db.json".to_string()
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

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "debug".to_string()
}

/// Chart and visualization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Default chart type
    #[serde(default = "default_chart_type")]
    pub default_chart_type: ChartType,
    /// Bar fill color
    #[serde(default = "default_bar_background")]
    pub bar_background: String,
    /// Bar border color
    #[serde(default = "default_bar_border")]
    pub bar_border: String,
    /// Show chart legends
    #[serde(default = "default_true")]
    pub show_legend: bool,
    /// Start the value axis at zero
    #[serde(default = "default_true")]
    pub begin_at_zero: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_chart_type: ChartType::Bar,
            bar_background: default_bar_background(),
            bar_border: default_bar_border(),
            show_legend: true,
            begin_at_zero: true,
        }
    }
}

fn default_chart_type() -> ChartType {
    ChartType::Bar
}

fn default_bar_background() -> String {
    "rgba(14, 165, 233, 0.6)".to_string()
}

fn default_bar_border() -> String {
    "rgba(2, 132, 199, 1)".to_string()
}

fn default_true() -> bool {
    true
}

/// Chart type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
}

impl Default for ChartType {
    fn default() -> Self {
        ChartType::Bar
    }
}

impl std::str::FromStr for ChartType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            _ => Err(format!("Invalid chart type: {}", s)),
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartType::Bar => write!(f, "bar"),
            ChartType::Line => write!(f, "line"),
            ChartType::Pie => write!(f, "pie"),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Dataset file settings
    #[serde(default)]
    pub data: DataConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Chart settings
    #[serde(default)]
    pub charts: ChartConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::IoError)?;

        // Try to parse the YAML
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|_| ConfigError::InvalidYaml)?;

        // Validate the configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate port
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        // Validate pagination
        if self.pagination.records_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.records_per_page".to_string(),
                reason: "Records per page must be greater than 0".to_string(),
            });
        }

        // Validate dataset file name
        if self.data.file.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data.file".to_string(),
                reason: "Dataset file name must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Get the full path to the dataset document
    pub fn dataset_path(&self) -> PathBuf {
        self.data.path.join(&self.data.file)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.data.file, "db.json");
        assert_eq!(config.pagination.records_per_page, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dataset_path_joins_dir_and_file() {
        let config = Config::default();
        assert_eq!(config.dataset_path(), PathBuf::from("./data").join("db.json"));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_dataset_file() {
        let mut config = Config::default();
        config.data.file = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chart_type_round_trip() {
        assert_eq!("bar".parse::<ChartType>().unwrap(), ChartType::Bar);
        assert_eq!(ChartType::Line.to_string(), "line");
        assert!("scatter".parse::<ChartType>().is_err());
    }
}
