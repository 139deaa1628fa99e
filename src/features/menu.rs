//! Technique menu and selection prompt.
//!
//! The menu never rejects input: whatever is typed (or not typed) is turned
//! into a selection, and [`Technique::from_selection`] supplies the default.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::core::Technique;

/// Title line printed above the menu.
pub const TITLE: &str = "Mindful Breathing Visualizer";

/// Prompt printed after the menu, without a trailing newline.
pub const PROMPT: &str = "Select a technique (1-3): ";

/// Print the title, the numbered techniques and the selection prompt.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    for technique in Technique::ALL {
        writeln!(out, "{}. {}", technique.menu_key(), technique.display_name())?;
    }
    write!(out, "{PROMPT}")?;
    out.flush()
}

/// Read one selection character.
///
/// Reads a single line and returns its first non-whitespace character.
/// End of input, a blank line and read errors all yield `None`.
pub fn read_selection<R: BufRead>(input: &mut R) -> Option<char> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => {
            debug!("selection input closed");
            None
        }
        Ok(_) => line.trim().chars().next(),
        Err(e) => {
            warn!(error = %e, "failed to read selection");
            None
        }
    }
}

/// Show the menu, read a selection and resolve it to a technique.
///
/// # Errors
///
/// Returns an error only if writing the menu fails.
pub fn choose<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Technique> {
    render_menu(out)?;
    let selection = read_selection(input);
    let technique = Technique::from_selection(selection);
    debug!(?selection, %technique, "resolved selection");
    Ok(technique)
}

/// Print the confirmation block shown before playback starts.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn announce<W: Write>(out: &mut W, technique: Technique) -> io::Result<()> {
    writeln!(out, "Starting {}...", technique.display_name())?;
    writeln!(out, "Press Ctrl+C to stop.")?;
    writeln!(out)?;
    out.flush()
}
