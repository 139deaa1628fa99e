//! The interactive breathing session: menu, confirmation, playback.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::config::{ColorSetting, Config, DisplayConfig, DisplayMode, Paths};
use crate::error::BreatheError;
use crate::features::menu;
use crate::features::playback::{Clock, PlaybackSummary, Player, StopSignal};
use crate::output::StatusStyle;

/// Load the user's config.
///
/// The file only affects presentation, so a missing home directory or an
/// unreadable or malformed file falls back to defaults with a warning.
#[must_use]
pub fn load_config() -> Config {
    match Paths::new() {
        Ok(paths) => load_config_from(&paths.config_file),
        Err(e) => {
            warn!(error = %e, "using default config");
            Config::default()
        }
    }
}

/// Load config from `path`, using defaults if it cannot be loaded.
#[must_use]
pub fn load_config_from(path: &Path) -> Config {
    Config::load_from_path(path).unwrap_or_else(|e| {
        warn!(error = %e, "using default config");
        Config::default()
    })
}

/// Turn display settings into a status style, pinning `colored` to the
/// explicit color choice.
#[must_use]
pub fn resolve_style(display: &DisplayConfig) -> StatusStyle {
    match display.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let mut style = StatusStyle::from_config(display);
    // A redrawn bar only makes sense on a single overwritten line.
    if style.mode == DisplayMode::Lines {
        style.progress_bar = false;
    }
    style
}

/// Run a session: show the menu, read a selection, announce the technique
/// and hand over to the player.
///
/// With the default player this does not return unless writing fails.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn session<R, W, C, S>(
    input: &mut R,
    out: &mut W,
    player: &mut Player<C, S>,
) -> Result<PlaybackSummary, BreatheError>
where
    R: BufRead,
    W: Write,
    C: Clock,
    S: StopSignal,
{
    let technique = menu::choose(input, out)?;
    menu::announce(out, technique)?;
    info!(%technique, cycle_secs = technique.cycle_duration().as_secs(), "starting playback");
    player.play(out, technique)
}
