//! Configuration settings for breathe.
//!
//! Settings are loaded from `~/.breathe/config.yaml`. The file is optional
//! and only affects how phases are displayed, never their durations.

use std::io::IsTerminal;

use serde::Deserialize;
use tracing::debug;

use crate::error::BreatheError;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Display settings.
    pub display: DisplayConfig,
}

/// How the status line is drawn.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Redraw one line in place, or print a line per phase.
    #[serde(default)]
    pub mode: DisplayMode,
    /// Show a progress bar that fills during each phase.
    #[serde(default)]
    pub progress_bar: bool,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Whether colors should be emitted on stdout.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => std::io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Status line layout.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Rewrite the same terminal line using a carriage return.
    #[default]
    Overwrite,
    /// Print each phase change on its own line.
    Lines,
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            mode: DisplayMode::default(),
            progress_bar: false,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, BreatheError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BreatheError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        // An empty file deserializes to unit, not a mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            BreatheError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
