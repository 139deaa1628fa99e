//! Time source for playback pauses.

use std::time::Duration;

/// Something that can block the current thread for a duration.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Pause for `duration`. Best effort: jitter is not compensated.
    fn sleep(&mut self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Real wall-clock sleeping via [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
