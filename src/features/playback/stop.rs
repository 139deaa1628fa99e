//! Stop signals checked between phases.
//!
//! The command-line session uses [`Never`], so playback only ends when the
//! process is interrupted from outside.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled once per phase transition.
pub trait StopSignal {
    /// Whether playback should end before the next phase starts.
    fn should_stop(&self) -> bool;
}

/// A signal that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl StopSignal for Never {
    fn should_stop(&self) -> bool {
        false
    }
}

/// A shareable flag that can be raised from anywhere.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask playback to stop at the next phase transition.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl StopSignal for StopFlag {
    fn should_stop(&self) -> bool {
        self.is_raised()
    }
}
