//! Stopwatch measuring seconds since its last start.

use crate::source::TimeSource;

/// Elapsed-time counter. Elapsed is derived on read, never stored, and a
/// stopped stopwatch reads 0; snapshot [`Stopwatch::elapsed`] before `stop`
/// if the final value matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stopwatch {
    started_at: u64,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start from zero. Calling again while running restarts, it does not accumulate.
    pub fn start(&mut self, clock: &impl TimeSource) {
        self.started_at = clock.now_millis();
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Seconds since `start`, floored to hundredths; 0 when stopped.
    pub fn elapsed(&self, clock: &impl TimeSource) -> f64 {
        if !self.running {
            return 0.0;
        }
        let centis = clock.now_millis().saturating_sub(self.started_at) / 10;
        centis as f64 / 100.0
    }
}
