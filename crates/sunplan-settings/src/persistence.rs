//! Settings Persistence
//!
//! Loads and saves the configuration from the platform config directory,
//! falling back to defaults when no file exists yet.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "sunplan";
const CONFIG_FILE: &str = "config.toml";

/// Settings persistence layer
#[derive(Debug, Clone, Default)]
pub struct SettingsPersistence {
    config: Config,
    path: Option<PathBuf>,
}

impl SettingsPersistence {
    /// Create new persistence layer with default config and no backing file
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform default location, e.g. `~/.config/sunplan/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load settings from `path`; a missing file yields defaults bound to that path.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        let config = if path.exists() {
            tracing::debug!("Loading settings from {}", path.display());
            Config::load_from_file(path)?
        } else {
            tracing::info!(
                "No settings file at {}, using defaults",
                path.display()
            );
            Config::default()
        };
        Ok(Self {
            config,
            path: Some(path.to_path_buf()),
        })
    }

    /// Save settings to the bound path.
    pub fn save(&self) -> SettingsResult<()> {
        match &self.path {
            Some(path) => self.config.save_to_file(path),
            None => Err(SettingsError::ConfigDirectory(
                "settings have no backing file".to_string(),
            )),
        }
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Path the settings are saved to, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
