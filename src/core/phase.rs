//! A single named interval within a breathing cycle.

use std::time::Duration;

/// What the breath is doing during a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// Drawing breath in.
    Inhale,
    /// Holding, either full or empty.
    Hold,
    /// Letting breath out.
    Exhale,
}

impl PhaseKind {
    /// Classify a phase label by its leading word.
    ///
    /// Anything that is not an inhale or exhale counts as a hold.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.starts_with("Inhale") {
            Self::Inhale
        } else if name.starts_with("Exhale") {
            Self::Exhale
        } else {
            Self::Hold
        }
    }
}

/// An immutable phase: a label and how long it lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Label shown to the user, e.g. "Inhale Left".
    pub name: &'static str,
    /// How long the phase lasts.
    pub duration: Duration,
}

impl Phase {
    /// Create a phase lasting the given number of whole seconds.
    #[must_use]
    pub const fn secs(name: &'static str, seconds: u64) -> Self {
        Self {
            name,
            duration: Duration::from_secs(seconds),
        }
    }

    /// Duration in whole seconds, rounded down.
    #[must_use]
    pub const fn seconds(&self) -> u128 {
        self.duration.as_millis() / 1000
    }

    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        PhaseKind::from_name(self.name)
    }
}

/// Iterate the phases of a cycle endlessly, wrapping from last to first.
///
/// An empty slice yields nothing.
pub fn cycle(phases: &'static [Phase]) -> impl Iterator<Item = &'static Phase> {
    phases.iter().cycle()
}
