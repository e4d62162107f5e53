//! Countdown timer driven by sampling a [`TimeSource`] on every query.
//!
//! There is no background tick: [`CountdownTimer::remaining`] charges the time
//! since the previous sample, so a late query still catches up correctly.

use crate::source::TimeSource;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TimerPhase {
    /// Never started, stopped, or expired.
    #[default]
    Idle,
    Running,
    Paused,
}

/// Countdown state. Every read mutates, so one owner drives it per frame;
/// sharing across threads needs an external lock.
#[derive(Clone, Debug, Default)]
pub struct CountdownTimer {
    phase: TimerPhase,
    total: f64,
    remaining: f64,
    last_sample: u64,
}

/// Floor to hundredths (2.999 → 2.99).
#[inline]
pub(crate) fn floor_hundredths(secs: f64) -> f64 {
    (secs * 100.0).floor() / 100.0
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> TimerPhase { self.phase }
    /// Duration passed to the last `start`, in seconds.
    #[inline]
    pub fn total(&self) -> f64 { self.total }

    pub fn is_running(&self) -> bool {
        self.phase != TimerPhase::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }

    /// (Re)start counting down from `seconds`, discarding any prior progress.
    /// Negative durations count as zero.
    pub fn start(&mut self, clock: &impl TimeSource, seconds: f64) {
        self.total = seconds.max(0.0);
        self.remaining = self.total;
        self.phase = TimerPhase::Running;
        self.last_sample = clock.now_millis();
    }

    /// Freeze the countdown. Time since the last sample is not charged, so
    /// hosts that want it counted read [`Self::remaining`] first.
    pub fn pause(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
        }
    }

    /// Resume from pause. Re-stamps the sample time so the paused span is
    /// not charged.
    pub fn unpause(&mut self, clock: &impl TimeSource) {
        if !self.is_running() {
            return;
        }
        self.phase = TimerPhase::Running;
        self.last_sample = clock.now_millis();
    }

    pub fn stop(&mut self) {
        self.phase = TimerPhase::Idle;
        self.remaining = 0.0;
    }

    /// Seconds left, floored to hundredths. Advances the countdown when
    /// running and unpaused; reaching zero moves the timer back to idle.
    pub fn remaining(&mut self, clock: &impl TimeSource) -> f64 {
        match self.phase {
            TimerPhase::Idle => return 0.0,
            TimerPhase::Paused => {}
            TimerPhase::Running => {
                let now = clock.now_millis();
                let delta = now.saturating_sub(self.last_sample) as f64 / 1000.0;
                self.remaining = (self.remaining - delta).max(0.0);
                self.last_sample = now;
                if self.remaining <= 0.0 {
                    self.phase = TimerPhase::Idle;
                    log::debug!("countdown of {:.2}s expired", self.total);
                }
            }
        }
        floor_hundredths(self.remaining)
    }
}
