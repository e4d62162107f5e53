//! timehud — simulated clock, countdown timer, stopwatch and a glyph-based
//! numeric HUD for tick-driven game loops.
//!
//! Nothing here runs in the background. Timer and stopwatch sample a
//! [`TimeSource`] whenever they are read, so time only advances when the host
//! asks. All state lives in an explicit [`TimeKit`] owned by the host; every
//! mutating call takes `&mut self`, which is the only synchronisation the
//! crate assumes (share it across threads behind a lock, if at all).
//!
//! # Example
//! ```
//! use timehud::{ManualClock, TimeKit};
//! let mut clock = ManualClock::default();
//! let mut kit: TimeKit<u32> = TimeKit::new();
//! kit.set_time(23, 59);
//! assert_eq!(kit.clock_time(), "23:59");
//! kit.start_timer(&clock, 5.0);
//! clock.advance(2_000);
//! assert_eq!(kit.timer_left(&clock), 3.0);
//! ```

pub mod calendar;
pub mod compositor;
pub mod config;
pub mod glyph;
pub mod hud;
pub mod palette;
pub mod plugin;
pub mod source;
pub mod sprite_sink;
pub mod stopwatch;
pub mod timer;

// Main exports
pub use calendar::ClockState;
pub use compositor::compose;
pub use config::{Config, ConfigError};
pub use glyph::{Bitmap, Glyph, GlyphSet};
pub use hud::{DisplaySink, HudController, HudMode, SinkError};
pub use plugin::{HudKit, HudSettings, TimeHudPlugin};
pub use source::{ManualClock, SystemClock, TimeSource};
pub use sprite_sink::{HudSprite, WorldSink};
pub use stopwatch::Stopwatch;
pub use timer::{CountdownTimer, TimerPhase};

/// Everything the time HUD tracks, owned by one host session.
///
/// `H` is the host's handle type for the on-screen HUD entity.
#[derive(Debug)]
pub struct TimeKit<H> {
    clock: ClockState,
    timer: CountdownTimer,
    stopwatch: Stopwatch,
    hud: HudController<H>,
}

impl<H> Default for TimeKit<H> {
    fn default() -> Self {
        Self {
            clock: ClockState::default(),
            timer: CountdownTimer::default(),
            stopwatch: Stopwatch::default(),
            hud: HudController::default(),
        }
    }
}

impl<H> TimeKit<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the clock/date in `config`.
    pub fn from_config(config: &config::ClockConfig) -> Self {
        let mut kit = Self::default();
        kit.set_time(config.hour, config.minute);
        kit.set_date(config.day, config.month, config.year);
        kit
    }

    pub fn clock(&self) -> &ClockState { &self.clock }
    pub fn timer(&self) -> &CountdownTimer { &self.timer }
    pub fn stopwatch(&self) -> &Stopwatch { &self.stopwatch }
    pub fn hud(&self) -> &HudController<H> { &self.hud }

    // ---------- clock ----------

    pub fn clock_time(&self) -> String {
        self.clock.time_string()
    }

    pub fn clock_date(&self) -> String {
        self.clock.date_string()
    }

    pub fn set_time(&mut self, hour: i64, minute: i64) {
        self.clock.set_time(hour, minute);
    }

    pub fn set_date(&mut self, day: i64, month: i64, year: i32) {
        self.clock.set_date(day, month, year);
    }

    // ---------- timer ----------

    pub fn start_timer(&mut self, source: &impl TimeSource, seconds: f64) {
        self.timer.start(source, seconds);
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
    }

    pub fn unpause_timer(&mut self, source: &impl TimeSource) {
        self.timer.unpause(source);
    }

    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    /// Seconds left on the countdown; advances it as a side effect.
    pub fn timer_left(&mut self, source: &impl TimeSource) -> f64 {
        self.timer.remaining(source)
    }

    // ---------- stopwatch ----------

    pub fn start_stopwatch(&mut self, source: &impl TimeSource) {
        self.stopwatch.start(source);
    }

    pub fn stop_stopwatch(&mut self) {
        self.stopwatch.stop();
    }

    pub fn stopwatch_elapsed(&self, source: &impl TimeSource) -> f64 {
        self.stopwatch.elapsed(source)
    }

    // ---------- hud ----------

    pub fn show_time_hud<S>(&mut self, sink: &mut S, x: f32, y: f32, color: u8) -> Result<(), SinkError>
    where
        S: DisplaySink<Handle = H>,
    {
        self.hud.show_time(sink, &self.clock, x, y, color)
    }

    pub fn show_stopwatch_hud<S>(
        &mut self,
        sink: &mut S,
        source: &impl TimeSource,
        x: f32,
        y: f32,
        color: u8,
    ) -> Result<(), SinkError>
    where
        S: DisplaySink<Handle = H>,
    {
        self.hud.show_stopwatch(sink, &self.stopwatch, source, x, y, color)
    }

    pub fn hide_hud<S>(&mut self, sink: &mut S) -> Result<(), SinkError>
    where
        S: DisplaySink<Handle = H>,
    {
        self.hud.hide(sink)
    }
}
