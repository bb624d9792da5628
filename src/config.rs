//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution. The engine itself takes geometry as plain values; this
//! config is where the CLI gets those values when a layout record does
//! not carry them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CELL_SIZE_PX, DEFAULT_FRAME_PX, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS,
    DEFAULT_UNIT_COUNT, DEFAULT_UNIT_HEIGHT_PX,
};
use crate::services::geometry::RackFrame;

/// Rack elevation geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RackConfig {
    /// Units per rack (default 42)
    pub unit_count: u32,
    /// Pixel height of one unit in the elevation view
    pub unit_height_px: f64,
    /// Pixel thickness of the rack frame above/below the unit area
    pub frame_px: f64,
}

impl Default for RackConfig {
    fn default() -> Self {
        Self {
            unit_count: DEFAULT_UNIT_COUNT,
            unit_height_px: DEFAULT_UNIT_HEIGHT_PX,
            frame_px: DEFAULT_FRAME_PX,
        }
    }
}

impl RackConfig {
    /// Builds the elevation-view frame for this config.
    ///
    /// The unit area starts below the top frame border, so `base_y`
    /// equals the frame thickness.
    #[must_use]
    pub const fn frame(&self) -> RackFrame {
        RackFrame::new(self.frame_px, self.unit_height_px, self.unit_count)
    }
}

/// Floor-plan grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorConfig {
    /// Grid width in cells
    pub cols: u32,
    /// Grid height in cells
    pub rows: u32,
    /// Pixel size of one cell
    pub cell_size_px: f64,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_GRID_COLS,
            rows: DEFAULT_GRID_ROWS,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Rack elevation geometry
    #[serde(default)]
    pub rack: RackConfig,
    /// Floor-plan grid geometry
    #[serde(default)]
    pub floor: FloorConfig,
}

impl Config {
    /// Gets the platform configuration directory.
    ///
    /// - Linux: `~/.config/RackPlanner/`
    /// - macOS: `~/Library/Application Support/RackPlanner/`
    /// - Windows: `%APPDATA%\RackPlanner\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine platform config directory")?;
        Ok(base.join("RackPlanner"))
    }

    /// Gets the path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration, falling back to defaults when the file
    /// does not exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        self.validate()?;
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        let path = Self::config_path()?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Validates the geometry values.
    pub fn validate(&self) -> Result<()> {
        if self.rack.unit_count == 0 {
            anyhow::bail!("rack.unit_count must be >= 1");
        }
        if self.rack.unit_height_px <= 0.0 {
            anyhow::bail!("rack.unit_height_px must be positive");
        }
        if self.floor.cols == 0 || self.floor.rows == 0 {
            anyhow::bail!("floor grid must be at least 1x1");
        }
        if self.floor.cell_size_px <= 0.0 {
            anyhow::bail!("floor.cell_size_px must be positive");
        }
        Ok(())
    }
}
