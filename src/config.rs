//! Viewport and rendering configuration.
//!
//! The configuration is plain serde data so it can be read from a JSON file or
//! round-tripped through eframe's persisted storage. The diagram itself is never
//! part of it.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON config file to load at startup.
pub const CONFIG_ENV_VAR: &str = "BLOCK_BOARD_CONFIG";

/// Key under which the configuration is stored in eframe's persistence.
pub const STORAGE_KEY: &str = "board_config";

/// Tunables for zooming and the background grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Lowest zoom level; the view never zooms out past this
    pub zoom_min: f32,
    /// Highest zoom level
    pub zoom_max: f32,
    /// Zoom change per wheel event
    pub zoom_step: f32,
    /// Whether the background grid is drawn
    pub show_grid: bool,
    /// Grid cell size in model units
    pub grid_spacing: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            zoom_min: 1.0,
            zoom_max: 3.0,
            zoom_step: 0.1,
            show_grid: false,
            grid_spacing: 50.0,
        }
    }
}

impl BoardConfig {
    /// Parses and validates a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], if the variable is set.
    pub fn from_env() -> Option<Result<Self, ConfigError>> {
        std::env::var_os(CONFIG_ENV_VAR).map(Self::load)
    }

    /// Checks that the values can drive a board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zoom_min <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "zoom_min must be positive, got {}",
                self.zoom_min
            )));
        }
        if self.zoom_max < self.zoom_min {
            return Err(ConfigError::Invalid(format!(
                "zoom_max ({}) must not be below zoom_min ({})",
                self.zoom_max, self.zoom_min
            )));
        }
        if self.zoom_step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "zoom_step must be positive, got {}",
                self.zoom_step
            )));
        }
        if self.grid_spacing <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "grid_spacing must be positive, got {}",
                self.grid_spacing
            )));
        }
        Ok(())
    }
}
