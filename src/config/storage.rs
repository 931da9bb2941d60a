//! Configuration Storage Implementation
//!
//! Provides JSON file-based configuration storage with:
//! - Atomic writes using temp file + rename
//! - Validation before anything is persisted
//! - Thread-safe access via RwLock
//! - Default configuration generation

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::logging::{LoggingConfig, LoggingResult, LoggingSystem};
use crate::tag::DEFAULT_DELIMITER;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration store settings
#[derive(Debug, Clone)]
pub struct ConfigStoreConfig {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Whether to create default config if not exists
    pub create_default: bool,
}

impl Default for ConfigStoreConfig {
    fn default() -> Self {
        let app_data = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tag-graph");

        Self {
            config_path: app_data.join("config.json"),
            create_default: true,
        }
    }
}

/// Settings for building and displaying tag graphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Configuration version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Delimiter placed between tag names in breadcrumbs
    #[serde(default = "default_delimiter")]
    pub path_delimiter: String,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Last modified timestamp
    #[serde(default = "default_timestamp")]
    pub last_modified: String,
}

fn default_version() -> u32 {
    1
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            path_delimiter: default_delimiter(),
            logging: LoggingConfig::default(),
            last_modified: default_timestamp(),
        }
    }
}

impl GraphConfig {
    /// Set the breadcrumb delimiter
    pub fn with_path_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.path_delimiter = delimiter.into();
        self
    }

    /// Set the logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Check the configuration for values the graph cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.path_delimiter.is_empty() {
            return Err(ConfigError::Invalid(
                "path_delimiter cannot be empty".to_string(),
            ));
        }
        if self.version == 0 {
            return Err(ConfigError::Invalid("version must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration store with thread-safe access
pub struct ConfigStore {
    config: Arc<RwLock<GraphConfig>>,
    settings: ConfigStoreConfig,
}

impl ConfigStore {
    /// Create a new configuration store
    pub fn new(settings: ConfigStoreConfig) -> ConfigResult<Self> {
        if let Some(parent) = settings.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let config = if settings.config_path.exists() {
            Self::load_from_file(&settings.config_path)?
        } else if settings.create_default {
            let default_config = GraphConfig::default();
            Self::save_to_file(&settings.config_path, &default_config)?;
            info!("Created default configuration at {:?}", settings.config_path);
            default_config
        } else {
            return Err(ConfigError::NotFound(settings.config_path.clone()));
        };

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            settings,
        })
    }

    /// Load and validate configuration from file
    fn load_from_file(path: &Path) -> ConfigResult<GraphConfig> {
        let content = std::fs::read_to_string(path)?;
        let config: GraphConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to file with atomic write
    fn save_to_file(path: &Path, config: &GraphConfig) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(config)?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content)?;
        std::fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Get current configuration (read-only)
    pub fn get(&self) -> GraphConfig {
        self.config.read().clone()
    }

    /// Update configuration
    ///
    /// The update is applied to a copy; nothing changes if the result does
    /// not validate.
    pub fn update<F>(&self, updater: F) -> ConfigResult<GraphConfig>
    where
        F: FnOnce(&mut GraphConfig),
    {
        let mut config = self.config.write();

        let mut updated = config.clone();
        updater(&mut updated);
        updated.validate()?;
        updated.last_modified = default_timestamp();

        Self::save_to_file(&self.settings.config_path, &updated)?;
        *config = updated;

        Ok(config.clone())
    }

    /// Set entire configuration
    pub fn set(&self, new_config: GraphConfig) -> ConfigResult<()> {
        self.update(|config| *config = new_config).map(|_| ())
    }

    /// Export configuration to a file
    pub fn export(&self, path: &Path) -> ConfigResult<()> {
        let config = self.config.read();
        Self::save_to_file(path, &config)
    }

    /// Import configuration from a file, returning it as stored
    pub fn import(&self, path: &Path) -> ConfigResult<GraphConfig> {
        let imported = Self::load_from_file(path)?;
        self.update(move |config| *config = imported)
    }

    /// Reset to default configuration
    pub fn reset(&self) -> ConfigResult<GraphConfig> {
        self.update(|config| *config = GraphConfig::default())
    }

    /// Get configuration file path
    pub fn config_path(&self) -> &Path {
        &self.settings.config_path
    }

    /// Set the breadcrumb delimiter
    pub fn set_path_delimiter(&self, delimiter: String) -> ConfigResult<GraphConfig> {
        self.update(|config| config.path_delimiter = delimiter)
    }

    /// Install the global subscriber described by the stored `logging` section
    pub fn init_logging(&self) -> LoggingResult<LoggingSystem> {
        LoggingSystem::init(self.get().logging)
    }
}
