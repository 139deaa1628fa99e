//! Configuration management for breathe.
//!
//! This module handles loading display settings from `~/.breathe/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, DisplayConfig, DisplayMode};
