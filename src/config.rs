//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::export::DEFAULT_EXPORT_SIZE;
use crate::models::BoardTemplate;
use crate::services::session::{MAX_SCALE, MIN_SCALE};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Board workspace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Template the editor opens with (a template id, e.g. "square-large")
    pub default_template: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_template: BoardTemplate::default().id().to_string(),
        }
    }
}

/// PNG export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Canvas edge length in pixels for exported PNGs
    pub size_px: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            size_px: DEFAULT_EXPORT_SIZE,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Board zoom factor the editor opens with
    #[serde(default = "default_board_scale")]
    pub board_scale: f32,
}

/// Default board scale (1.0 = 100%)
fn default_board_scale() -> f32 {
    1.0
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            board_scale: default_board_scale(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/BeadPatternDesigner/config.toml`
/// - macOS: `~/Library/Application Support/BeadPatternDesigner/config.toml`
/// - Windows: `%APPDATA%\BeadPatternDesigner\config.toml`
///
/// # Validation
///
/// - `default_template` must be a known template id
/// - `size_px` must lie in a sane rendering range
/// - `board_scale` must lie within the editor's zoom bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Board workspace settings
    #[serde(default)]
    pub board: BoardConfig,
    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/BeadPatternDesigner/`
    /// - macOS: `~/Library/Application Support/BeadPatternDesigner/`
    /// - Windows: `%APPDATA%\BeadPatternDesigner\`
    ///
    /// The `BEADLOOM_CONFIG_DIR` environment variable overrides the
    /// platform directory; tests use it to isolate state.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("BEADLOOM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("BeadPatternDesigner");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the full path to the palette key-value store file.
    pub fn store_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("palette.json"))
    }

    /// The template the editor opens with.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured id is unknown.
    pub fn default_template(&self) -> Result<BoardTemplate> {
        BoardTemplate::from_id(&self.board.default_template)
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        BoardTemplate::from_id(&self.board.default_template)
            .context("Invalid default_template in config")?;

        if !(100..=4000).contains(&self.export.size_px) {
            anyhow::bail!(
                "Export size must be between 100 and 4000 pixels, got {}",
                self.export.size_px
            );
        }

        if !(MIN_SCALE..=MAX_SCALE).contains(&self.ui.board_scale) {
            anyhow::bail!(
                "Board scale must be between {MIN_SCALE} and {MAX_SCALE}, got {}",
                self.ui.board_scale
            );
        }

        Ok(())
    }
}
