//! Monotonic millisecond sources sampled by the timer and stopwatch.

use bevy::time::{Real, Time};
use std::time::Instant;

/// Host clock: monotonic, non-decreasing milliseconds from an arbitrary epoch.
pub trait TimeSource {
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by `Instant`, epoch at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to. Used in tests and to pin a single
/// timestamp for everything that happens within one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn at(now: u64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, millis: u64) {
        self.now = self.now.saturating_add(millis);
    }

    /// Jump to `millis`; earlier values are ignored to stay monotonic.
    pub fn set(&mut self, millis: u64) {
        self.now = self.now.max(millis);
    }
}

impl TimeSource for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now
    }
}

/// Milliseconds since app startup, unaffected by virtual-time pausing.
impl TimeSource for Time<Real> {
    fn now_millis(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}
