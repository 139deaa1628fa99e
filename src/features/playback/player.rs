//! The playback loop.

use std::io::Write;
use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{cycle, Phase, Technique};
use crate::error::BreatheError;
use crate::features::playback::{Clock, Never, StopSignal, SystemClock};
use crate::output::{render_status, StatusStyle};

/// Redraw interval while a progress bar is shown.
pub const PROGRESS_TICK: Duration = Duration::from_millis(250);

/// What happened before a stop signal ended playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Number of phases that ran to completion.
    pub phases_played: u64,
}

/// Plays a technique's phases in order, forever or until stopped.
pub struct Player<C: Clock = SystemClock, S: StopSignal = Never> {
    style: StatusStyle,
    clock: C,
    stop: S,
}

impl Player {
    /// A player that sleeps on the wall clock and never stops by itself.
    #[must_use]
    pub fn new(style: StatusStyle) -> Self {
        Self::with_parts(style, SystemClock, Never)
    }
}

impl<C: Clock, S: StopSignal> Player<C, S> {
    pub fn with_parts(style: StatusStyle, clock: C, stop: S) -> Self {
        Self { style, clock, stop }
    }

    /// Play the technique's phases in a loop.
    ///
    /// The stop signal is checked before each phase. With [`Never`] this
    /// only returns on a write error.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the status line fails.
    pub fn play<W: Write>(
        &mut self,
        out: &mut W,
        technique: Technique,
    ) -> Result<PlaybackSummary, BreatheError> {
        let mut summary = PlaybackSummary { phases_played: 0 };

        for phase in cycle(technique.phases()) {
            if self.stop.should_stop() {
                debug!(phases = summary.phases_played, "playback stopped");
                break;
            }
            debug!(phase = phase.name, secs = %phase.seconds(), "phase");
            self.play_phase(out, phase)?;
            summary.phases_played += 1;
        }

        Ok(summary)
    }

    fn play_phase<W: Write>(&mut self, out: &mut W, phase: &Phase) -> Result<(), BreatheError> {
        if !self.style.progress_bar {
            self.draw(out, phase, None)?;
            self.clock.sleep(phase.duration);
            return Ok(());
        }

        self.draw(out, phase, Some(0.0))?;
        let mut elapsed = Duration::ZERO;
        while elapsed < phase.duration {
            let step = PROGRESS_TICK.min(phase.duration - elapsed);
            self.clock.sleep(step);
            elapsed += step;
            let progress = elapsed.as_secs_f64() / phase.duration.as_secs_f64();
            trace!(progress, "tick");
            self.draw(out, phase, Some(progress))?;
        }
        Ok(())
    }

    fn draw<W: Write>(
        &self,
        out: &mut W,
        phase: &Phase,
        progress: Option<f64>,
    ) -> Result<(), BreatheError> {
        out.write_all(render_status(phase, self.style, progress).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayMode;
    use crate::features::playback::{MockClock, StopFlag};
    use std::io;

    /// Records every pause instead of sleeping, raising the flag after `limit`.
    struct RecordingClock {
        pauses: Vec<Duration>,
        limit: usize,
        flag: StopFlag,
    }

    impl RecordingClock {
        fn new(limit: usize, flag: StopFlag) -> Self {
            Self {
                pauses: Vec::new(),
                limit,
                flag,
            }
        }
    }

    impl Clock for RecordingClock {
        fn sleep(&mut self, duration: Duration) {
            self.pauses.push(duration);
            if self.pauses.len() >= self.limit {
                self.flag.raise();
            }
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn frames(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .split('\r')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_diaphragmatic_alternates() {
        let flag = StopFlag::new();
        let handle = flag.clone();
        let mut played = 0;

        let mut clock = MockClock::new();
        clock
            .expect_sleep()
            .withf(|d| *d == Duration::from_secs(5))
            .times(5)
            .returning(move |_| {
                played += 1;
                if played == 5 {
                    handle.raise();
                }
            });

        let mut out = Vec::new();
        let summary = Player::with_parts(StatusStyle::plain(), clock, flag)
            .play(&mut out, Technique::Diaphragmatic)
            .unwrap();

        assert_eq!(summary.phases_played, 5);
        assert_eq!(
            frames(&out),
            [
                "Phase: Inhale (5s)   ",
                "Phase: Exhale (5s)   ",
                "Phase: Inhale (5s)   ",
                "Phase: Exhale (5s)   ",
                "Phase: Inhale (5s)   ",
            ]
        );
    }

    #[test]
    fn test_box_cycles_back_to_first_phase() {
        let flag = StopFlag::new();
        let mut clock = RecordingClock::new(6, flag.clone());
        let mut out = Vec::new();

        Player::with_parts(StatusStyle::plain(), &mut clock, flag)
            .play(&mut out, Technique::Box)
            .unwrap();

        assert_eq!(clock.pauses, vec![Duration::from_secs(4); 6]);
        assert_eq!(
            frames(&out),
            [
                "Phase: Inhale (4s)   ",
                "Phase: Hold (4s)   ",
                "Phase: Exhale (4s)   ",
                "Phase: Hold (4s)   ",
                "Phase: Inhale (4s)   ",
                "Phase: Hold (4s)   ",
            ]
        );
    }

    #[test]
    fn test_alternate_nostril_full_cycle_then_wrap() {
        let flag = StopFlag::new();
        let mut clock = RecordingClock::new(9, flag.clone());
        let mut out = Vec::new();

        Player::with_parts(StatusStyle::plain(), &mut clock, flag)
            .play(&mut out, Technique::AlternateNostril)
            .unwrap();

        let names: Vec<_> = frames(&out)
            .iter()
            .map(|f| f.trim_end().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "Phase: Inhale Left (4s)",
                "Phase: Hold (4s)",
                "Phase: Exhale Right (4s)",
                "Phase: Hold (4s)",
                "Phase: Inhale Right (4s)",
                "Phase: Hold (4s)",
                "Phase: Exhale Left (4s)",
                "Phase: Hold (4s)",
                "Phase: Inhale Left (4s)",
            ]
        );
        assert_eq!(clock.pauses.iter().sum::<Duration>(), Duration::from_secs(36));
    }

    #[test]
    fn test_stop_before_first_phase() {
        let flag = StopFlag::new();
        flag.raise();

        let mut clock = MockClock::new();
        clock.expect_sleep().never();
        let mut out = Vec::new();

        let summary = Player::with_parts(StatusStyle::plain(), clock, flag)
            .play(&mut out, Technique::Box)
            .unwrap();

        assert_eq!(summary.phases_played, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_lines_mode() {
        let flag = StopFlag::new();
        let mut clock = RecordingClock::new(2, flag.clone());
        let style = StatusStyle {
            mode: DisplayMode::Lines,
            ..StatusStyle::plain()
        };
        let mut out = Vec::new();

        Player::with_parts(style, &mut clock, flag)
            .play(&mut out, Technique::Diaphragmatic)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Phase: Inhale (5s)   \nPhase: Exhale (5s)   \n"
        );
    }

    #[test]
    fn test_progress_bar_splits_sleep_into_ticks() {
        let flag = StopFlag::new();
        // One Box phase is 4s, i.e. sixteen 250ms ticks.
        let mut clock = RecordingClock::new(16, flag.clone());
        let style = StatusStyle {
            progress_bar: true,
            ..StatusStyle::plain()
        };
        let mut out = Vec::new();

        let summary = Player::with_parts(style, &mut clock, flag)
            .play(&mut out, Technique::Box)
            .unwrap();

        assert_eq!(summary.phases_played, 1);
        assert_eq!(clock.pauses, vec![PROGRESS_TICK; 16]);

        let frames = frames(&out);
        assert_eq!(frames.len(), 17);
        assert!(frames[0].contains(&"░".repeat(20)));
        assert!(frames[16].contains(&"█".repeat(20)));
        assert!(frames.iter().all(|f| f.starts_with("Phase: Inhale (4s) [")));
    }

    #[test]
    fn test_write_error_propagates() {
        let mut clock = MockClock::new();
        clock.expect_sleep().never();

        let err = Player::with_parts(StatusStyle::plain(), clock, Never)
            .play(&mut BrokenPipe, Technique::Box)
            .unwrap_err();

        assert!(matches!(err, BreatheError::Io(_)));
    }
}
