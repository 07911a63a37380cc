// src/infrastructure/config.rs
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BASE_URL};
use crate::domain::NoteShape;

/// TOML configuration for the client
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notes: NotesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct NotesConfig {
    /// Body shape sent when creating or updating notes
    #[serde(default)]
    pub shape: NoteShape,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to TOML file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_string = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Create default configuration file at path.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn create_default(path: impl AsRef<Path>, force: bool) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// `<platform config dir>/notes-client/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Build the effective configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and built-in defaults otherwise. `base_url` wins over
    /// whatever the file says.
    pub fn resolve(explicit: Option<&Path>, base_url: Option<&str>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                debug!(?path, "Using provided config file");
                Self::load(path)?
            }
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    debug!(?path, "Using default config file");
                    Self::load(&path)?
                }
                None => {
                    debug!("No config file, using defaults");
                    Self::default()
                }
            },
        };

        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            debug!(url, "Overriding base URL");
            config.api.base_url = url.to_string();
        }

        Ok(config)
    }
}
