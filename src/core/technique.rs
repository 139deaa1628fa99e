//! The fixed set of breathing techniques and their phase tables.

use std::time::Duration;

use crate::core::Phase;

static BOX: [Phase; 4] = [
    Phase::secs("Inhale", 4),
    Phase::secs("Hold", 4),
    Phase::secs("Exhale", 4),
    Phase::secs("Hold", 4),
];

static DIAPHRAGMATIC: [Phase; 2] = [Phase::secs("Inhale", 5), Phase::secs("Exhale", 5)];

static ALTERNATE_NOSTRIL: [Phase; 8] = [
    Phase::secs("Inhale Left", 4),
    Phase::secs("Hold", 4),
    Phase::secs("Exhale Right", 4),
    Phase::secs("Hold", 4),
    Phase::secs("Inhale Right", 4),
    Phase::secs("Hold", 4),
    Phase::secs("Exhale Left", 4),
    Phase::secs("Hold", 4),
];

/// A breathing technique: a fixed, ordered, cyclic sequence of phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Technique {
    /// Four equal counts: inhale, hold, exhale, hold.
    #[default]
    Box,
    /// Slow belly breathing.
    Diaphragmatic,
    /// Nadi shodhana, alternating nostrils with holds in between.
    AlternateNostril,
}

impl Technique {
    /// All techniques in menu order.
    pub const ALL: [Self; 3] = [Self::Box, Self::Diaphragmatic, Self::AlternateNostril];

    /// Resolve a menu selection.
    ///
    /// Only `'2'` and `'3'` pick a non-default technique. Every other
    /// character, including `'1'`, and a missing selection all resolve to
    /// [`Technique::Box`]. Unrecognized input is not an error.
    #[must_use]
    pub const fn from_selection(selection: Option<char>) -> Self {
        match selection {
            Some('2') => Self::Diaphragmatic,
            Some('3') => Self::AlternateNostril,
            _ => Self::Box,
        }
    }

    /// The ordered phase table for this technique. Never empty.
    #[must_use]
    pub fn phases(&self) -> &'static [Phase] {
        match self {
            Self::Box => &BOX,
            Self::Diaphragmatic => &DIAPHRAGMATIC,
            Self::AlternateNostril => &ALTERNATE_NOSTRIL,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Box => "Box Breathing",
            Self::Diaphragmatic => "Diaphragmatic Breathing",
            Self::AlternateNostril => "Alternate Nostril Breathing",
        }
    }

    /// The key that selects this technique in the menu.
    #[must_use]
    pub const fn menu_key(&self) -> char {
        match self {
            Self::Box => '1',
            Self::Diaphragmatic => '2',
            Self::AlternateNostril => '3',
        }
    }

    /// Length of one full cycle.
    #[must_use]
    pub fn cycle_duration(&self) -> Duration {
        self.phases().iter().map(|p| p.duration).sum()
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
