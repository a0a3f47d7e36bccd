//! Configuration module for seqtrie.
//!
//! Settings can be loaded from files (TOML, YAML, JSON) and overridden with
//! environment variables. All configuration values are validated before use.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;
use crate::trie::{SequenceTrie, TrieConfig};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const DEFAULT_ENV_PREFIX: &str = "SEQTRIE";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level settings for an application embedding seqtrie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Trie configuration
    pub trie: TrieConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Settings {
    /// Creates an empty trie configured from these settings.
    pub fn build_trie<T>(&self) -> SequenceTrie<T> {
        SequenceTrie::with_config(self.trie.clone())
    }
}

impl Validate for Settings {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader.
///
/// Sources are layered in this order, later ones winning: built-in defaults,
/// the optional configuration file, then environment variables named
/// `<PREFIX>__<SECTION>__<KEY>` (e.g. `SEQTRIE__LOG__LEVEL`).
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the settings from defaults, the file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` if the settings were loaded and are valid
    /// * `Err(ConfigError)` if there was an error loading or validating them
    pub fn load(&self) -> ConfigResult<Settings> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Settings::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml" | "json" | "yaml" | "yml") => {
                    builder = builder.add_source(File::from(path.as_path()));
                }
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        settings.validate()?;

        tracing::debug!(
            trie = %settings.trie.name,
            verify_invariants = settings.trie.verify_invariants,
            log_level = %settings.log.level,
            "Configuration loaded"
        );

        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(None::<PathBuf>, DEFAULT_ENV_PREFIX)
    }
}
