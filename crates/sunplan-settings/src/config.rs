//! Configuration and settings management for SunPlan
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (grid, snapping, orthogonal constraint)
//! - Viewport preferences (zoom limits and steps, animation timing)
//! - History preferences (undo depth)

use crate::error::{ConfigError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use sunplan_core::constants;

/// Maximum number of entries kept in [`Config::recent_files`].
const RECENT_FILES_LIMIT: usize = 10;

/// Grid and constraint settings shared by every tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Round placed points to the grid.
    pub snap_to_grid: bool,
    /// Grid pitch in screen pixels.
    pub grid_size: f64,
    /// Draw the grid overlay.
    pub show_grid: bool,
    /// Mirrors the constraint modifier key; never persisted.
    #[serde(skip)]
    pub orthogonal_constraint: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: false,
            grid_size: constants::DEFAULT_GRID_SIZE_PX,
            show_grid: true,
            orthogonal_constraint: false,
        }
    }
}

/// Camera behaviour preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    #[serde(default = "default_keyboard_zoom_step")]
    pub keyboard_zoom_step: f64,
    #[serde(default = "default_wheel_zoom_step")]
    pub wheel_zoom_step: f64,
    /// Duration of the keep-visible animation in milliseconds.
    #[serde(default = "default_animation_ms")]
    pub animation_ms: f64,
}

fn default_min_zoom() -> f64 {
    constants::MIN_ZOOM
}
fn default_max_zoom() -> f64 {
    constants::MAX_ZOOM
}
fn default_keyboard_zoom_step() -> f64 {
    constants::KEYBOARD_ZOOM_STEP
}
fn default_wheel_zoom_step() -> f64 {
    constants::WHEEL_ZOOM_STEP
}
fn default_animation_ms() -> f64 {
    constants::VIEWPORT_ANIMATION_MS
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            keyboard_zoom_step: default_keyboard_zoom_step(),
            wheel_zoom_step: default_wheel_zoom_step(),
            animation_ms: default_animation_ms(),
        }
    }
}

/// Undo/redo preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Number of undo steps retained before the oldest is dropped.
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: constants::DEFAULT_HISTORY_DEPTH,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Recently imported or exported documents, newest first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub viewport: ViewportSettings,
    #[serde(default)]
    pub history: HistorySettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate all settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.editor.grid_size.is_finite() && self.editor.grid_size > 0.0) {
            return Err(ConfigError::out_of_range(
                "editor.grid_size",
                self.editor.grid_size,
            ));
        }

        let vp = &self.viewport;
        if !(vp.min_zoom > 0.0 && vp.min_zoom < vp.max_zoom && vp.max_zoom.is_finite()) {
            return Err(ConfigError::out_of_range(
                "viewport.min_zoom",
                format!("{}..{}", vp.min_zoom, vp.max_zoom),
            ));
        }
        if !(vp.keyboard_zoom_step.is_finite() && vp.keyboard_zoom_step > 1.0) {
            return Err(ConfigError::out_of_range(
                "viewport.keyboard_zoom_step",
                vp.keyboard_zoom_step,
            ));
        }
        if !(vp.wheel_zoom_step.is_finite() && vp.wheel_zoom_step > 1.0) {
            return Err(ConfigError::out_of_range(
                "viewport.wheel_zoom_step",
                vp.wheel_zoom_step,
            ));
        }
        if !(vp.animation_ms.is_finite() && vp.animation_ms >= 0.0) {
            return Err(ConfigError::out_of_range(
                "viewport.animation_ms",
                vp.animation_ms,
            ));
        }

        if self.history.max_depth == 0 {
            return Err(ConfigError::out_of_range("history.max_depth", 0));
        }

        Ok(())
    }

    /// Add file to recent files list, most recent first.
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(RECENT_FILES_LIMIT);
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
