use colored::{ColoredString, Colorize};

use crate::config::{DisplayConfig, DisplayMode};
use crate::core::{Phase, PhaseKind};

/// Width of the in-phase progress bar, in cells.
pub const PROGRESS_WIDTH: usize = 20;

/// Resolved display settings for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusStyle {
    /// Emit ANSI colors.
    pub color: bool,
    /// Overwrite in place or one line per phase.
    pub mode: DisplayMode,
    /// Redraw with a progress bar while the phase runs.
    pub progress_bar: bool,
}

impl StatusStyle {
    /// Plain overwrite style with no color and no progress bar.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            color: display.color.enabled(),
            mode: display.mode,
            progress_bar: display.progress_bar,
        }
    }
}

fn status_label(phase: &Phase) -> String {
    format!("Phase: {} ({}s)", phase.name, phase.seconds())
}

fn paint(text: String, kind: PhaseKind) -> ColoredString {
    match kind {
        PhaseKind::Inhale => text.green(),
        PhaseKind::Exhale => text.red(),
        PhaseKind::Hold => text.blue(),
    }
}

/// Render the full status frame for a phase, ready to be written:
/// `Phase: <name> (<secs>s)   `, framed by `\r` or a trailing newline.
///
/// The trailing spaces pad over a longer label left on the line.
/// `progress` is the fraction of the phase elapsed and is only drawn when the
/// style asks for a progress bar.
#[must_use]
pub fn render_status(phase: &Phase, style: StatusStyle, progress: Option<f64>) -> String {
    let mut text = status_label(phase);
    if style.color {
        text = paint(text, phase.kind()).to_string();
    }

    if style.progress_bar {
        if let Some(progress) = progress {
            text.push(' ');
            text.push_str(&render_progress_bar(progress, PROGRESS_WIDTH));
        }
    }
    text.push_str("   ");

    match style.mode {
        DisplayMode::Overwrite => format!("\r{text}"),
        DisplayMode::Lines => format!("{text}\n"),
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_render_plain_labels() {
        let style = StatusStyle::plain();
        assert_eq!(
            render_status(&Phase::secs("Inhale", 5), style, None),
            "\rPhase: Inhale (5s)   "
        );
        assert_eq!(
            render_status(&Phase::secs("Exhale Right", 4), style, None),
            "\rPhase: Exhale Right (4s)   "
        );
    }

    #[test]
    fn test_render_floors_seconds() {
        let phase = Phase {
            name: "Hold",
            duration: Duration::from_millis(2750),
        };
        assert_eq!(
            render_status(&phase, StatusStyle::plain(), None),
            "\rPhase: Hold (2s)   "
        );
    }

    #[test]
    fn test_render_overwrite() {
        let frame = render_status(&Phase::secs("Hold", 4), StatusStyle::plain(), None);
        assert_eq!(frame, "\rPhase: Hold (4s)   ");
    }

    #[test]
    fn test_render_lines() {
        let style = StatusStyle {
            mode: DisplayMode::Lines,
            ..StatusStyle::plain()
        };
        let frame = render_status(&Phase::secs("Inhale", 5), style, None);
        assert_eq!(frame, "Phase: Inhale (5s)   \n");
    }

    #[test]
    fn test_render_with_progress() {
        let style = StatusStyle {
            progress_bar: true,
            ..StatusStyle::plain()
        };
        let frame = render_status(&Phase::secs("Inhale", 4), style, Some(0.5));
        assert!(frame.starts_with("\rPhase: Inhale (4s) ["));
        assert!(frame.contains(&"█".repeat(10)));
        assert!(frame.contains(&"░".repeat(10)));
    }

    #[test]
    fn test_render_colored() {
        colored::control::set_override(true);
        let style = StatusStyle {
            color: true,
            ..StatusStyle::plain()
        };
        let inhale = render_status(&Phase::secs("Inhale", 4), style, None);
        let exhale = render_status(&Phase::secs("Exhale Right", 4), style, None);
        let hold = render_status(&Phase::secs("Hold", 4), style, None);
        colored::control::unset_override();

        assert!(inhale.contains("\u{1b}[32m"));
        assert!(inhale.contains("Phase: Inhale (4s)"));
        assert!(exhale.contains("\u{1b}[31m"));
        assert!(exhale.contains("Phase: Exhale Right (4s)"));
        assert!(hold.contains("\u{1b}[34m"));
        assert!(hold.contains("Phase: Hold (4s)"));
    }

    #[test]
    fn test_render_progress_bar() {
        assert_eq!(render_progress_bar(0.0, 4), "[░░░░]");
        assert_eq!(render_progress_bar(1.0, 4), "[████]");
        assert_eq!(render_progress_bar(1.7, 4), "[████]");
    }
}
