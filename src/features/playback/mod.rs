//! Phase playback.
//!
//! Prints the current phase and pauses for its duration, cycling through the
//! technique until an external interrupt ends the process. The clock and
//! stop signal are injectable so the loop can be driven without real time.

mod clock;
mod player;
mod stop;

#[cfg(test)]
pub use clock::MockClock;
pub use clock::{Clock, SystemClock};
pub use player::{PlaybackSummary, Player, PROGRESS_TICK};
pub use stop::{Never, StopFlag, StopSignal};
