//! Configuration module for artfolio
//!
//! Manages application configuration: where the catalog database lives, how
//! corrupt stored data is treated, and the predefined tag vocabulary offered
//! when adding works. Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use crate::catalog::LoadPolicy;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tag vocabulary offered to users when adding a work
pub const PREDEFINED_TAGS: [&str; 20] = [
    "Logo Design",
    "UI Design",
    "UX Design",
    "Banner Design",
    "Poster Design",
    "Illustration",
    "Branding",
    "Typography",
    "Web Design",
    "Packaging",
    "Photography",
    "3D Art",
    "Motion Graphics",
    "Character Design",
    "Concept Art",
    "Print Design",
    "Icon Design",
    "Infographic",
    "Social Media",
    "Pixel Art",
];

fn default_predefined_tags() -> Vec<String> {
    PREDEFINED_TAGS.iter().map(ToString::to_string).collect()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ArtfolioConfig {
    /// Location of the catalog database; defaults to the data directory
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Behavior when a stored collection cannot be parsed
    #[serde(default)]
    pub load_policy: LoadPolicy,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Tags offered when adding a work
    #[serde(default = "default_predefined_tags")]
    pub predefined_tags: Vec<String>,
}

impl Default for ArtfolioConfig {
    fn default() -> Self {
        Self {
            database: None,
            load_policy: LoadPolicy::default(),
            quiet: false,
            predefined_tags: default_predefined_tags(),
        }
    }
}

impl ArtfolioConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("artfolio").join("config.toml"))
    }

    /// Default database location under the local data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the data directory cannot be determined.
    pub fn default_database_path() -> Result<PathBuf, ConfigError> {
        dirs::data_local_dir()
            .map(|dir| dir.join("artfolio").join("db"))
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
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

        Ok(())
    }

    /// Database path, falling back to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the data directory
    /// cannot be determined.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Self::default_database_path(),
        }
    }

    /// Whether `tag` is in the predefined vocabulary, ignoring case and padding
    #[must_use]
    pub fn is_predefined_tag(&self, tag: &str) -> bool {
        let wanted = crate::search::normalize_tag(tag);
        self.predefined_tags
            .iter()
            .any(|t| crate::search::normalize_tag(t) == wanted)
    }

    /// Set a value from a `key=value` string
    ///
    /// Supported keys: `quiet`, `load_policy`, `database`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for malformed settings, unknown keys, or bad values.
    pub fn set_value(&mut self, setting: &str) -> Result<(), ConfigError> {
        let (key, value) = setting
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .ok_or_else(|| ConfigError::Message(format!("Expected KEY=VALUE, got '{setting}'")))?;

        match key {
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("Invalid boolean '{value}'")))?;
            }
            "load_policy" => {
                self.load_policy = value.parse().map_err(ConfigError::Message)?;
            }
            "database" => {
                self.database = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            other => {
                return Err(ConfigError::Message(format!("Unknown configuration key '{other}'")));
            }
        }
        Ok(())
    }

    /// Read a value by key as display text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key.trim() {
            "quiet" => Ok(self.quiet.to_string()),
            "load_policy" => Ok(match self.load_policy {
                LoadPolicy::Strict => "strict".to_string(),
                LoadPolicy::Lenient => "lenient".to_string(),
            }),
            "database" => Ok(self
                .database
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "predefined_tags" => Ok(self.predefined_tags.join(", ")),
            other => Err(ConfigError::Message(format!("Unknown configuration key '{other}'"))),
        }
    }
}
