//! Configuration module for khana
//!
//! Settings live in `config.toml` under the user's config directory and can be
//! overridden by `KHANA_*` environment variables (`KHANA_API_KEY` being the
//! usual one).

mod setup;

pub use setup::first_time_setup;

use crate::facets;
use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "KHANA";

/// Upper bound the search endpoint accepts for `maxResults`
pub const MAX_RESULTS_LIMIT: u8 = 50;

fn default_endpoint() -> String {
    crate::search::DEFAULT_ENDPOINT.to_string()
}

const fn default_max_results() -> u8 {
    12
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_method() -> String {
    facets::DEFAULT_METHOD_ID.to_string()
}

fn default_category() -> String {
    facets::DEFAULT_CATEGORY_ID.to_string()
}

/// Application configuration structure
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct KhanaConfig {
    /// YouTube Data API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API host, without the `/youtube/v3/search` path
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Results requested per search
    #[serde(default = "default_max_results")]
    pub max_results: u8,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Method selected at startup
    #[serde(default = "default_method")]
    pub default_method: String,

    /// Category selected at startup
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for KhanaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
            default_method: default_method(),
            default_category: default_category(),
            quiet: false,
        }
    }
}

impl fmt::Debug for KhanaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KhanaConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("max_results", &self.max_results)
            .field("timeout_secs", &self.timeout_secs)
            .field("default_method", &self.default_method)
            .field("default_category", &self.default_category)
            .field("quiet", &self.quiet)
            .finish()
    }
}

impl KhanaConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("khana").join("config.toml"))
    }

    /// Load configuration from the default path plus environment overrides
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or holds invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path` plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load only what is stored in `path`, ignoring the environment
    ///
    /// Used before editing and saving the file, so environment overrides are
    /// never written back.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or holds invalid values.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX).source(Some(Map::new())))
    }

    fn load_with_env(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, running first-time setup if there is no config file
    /// and no key in the environment
    ///
    /// Setup only runs on an interactive terminal.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        let config = Self::load_from(&config_path)?;

        if !config_path.exists() && !config.has_api_key() && std::io::stdin().is_terminal() {
            return first_time_setup(&config_path);
        }
        Ok(config)
    }

    /// Save configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Check value ranges and facet ids
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_RESULTS_LIMIT).contains(&self.max_results) {
            return Err(ConfigError::Message(format!(
                "max_results must be between 1 and {MAX_RESULTS_LIMIT}, got {}",
                self.max_results
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Message("timeout_secs must be greater than 0".to_string()));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if facets::find_method(&self.default_method).is_none() {
            return Err(ConfigError::Message(format!(
                "unknown default_method '{}' (expected one of: {})",
                self.default_method,
                facets::method_ids()
            )));
        }
        if facets::find_category(&self.default_category).is_none() {
            return Err(ConfigError::Message(format!(
                "unknown default_category '{}' (expected one of: {})",
                self.default_category,
                facets::category_ids()
            )));
        }
        Ok(())
    }

    /// Whether a non-blank API key is set
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }

    /// Store `key`, trimmed; a blank key clears it
    pub fn set_api_key(&mut self, key: &str) {
        let key = key.trim();
        self.api_key = (!key.is_empty()).then(|| key.to_string());
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
