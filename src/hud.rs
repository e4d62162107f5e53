//! Single-entity numeric HUD.
//!
//! [`HudController`] owns at most one on-screen entity. Every `show_*` call
//! releases the previous entity before asking the [`DisplaySink`] for a new
//! one, so there is never more than one HUD alive.

use serde::Deserialize;

use crate::calendar::ClockState;
use crate::compositor::compose;
use crate::glyph::Bitmap;
use crate::source::TimeSource;
use crate::stopwatch::Stopwatch;

/// Failure reported by the host when creating or destroying a HUD entity.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("display entity no longer exists")]
    EntityMissing,
    #[error("host rejected display request: {0}")]
    Rejected(String),
}

/// Capability the host provides for putting a bitmap on screen.
pub trait DisplaySink {
    type Handle;

    /// Create a display entity for `bitmap` at screen position `(x, y)`.
    fn render(&mut self, bitmap: &Bitmap, x: f32, y: f32) -> Result<Self::Handle, SinkError>;

    /// Destroy a previously rendered entity. The caller keeps `handle` until
    /// this succeeds, so a rejected clear can be retried.
    fn clear(&mut self, handle: &Self::Handle) -> Result<(), SinkError>;
}

/// What the HUD shows on refresh.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String")]
pub enum HudMode {
    #[default]
    Clock,
    Stopwatch,
    Hidden,
}

impl HudMode {
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "clock" | "time" => HudMode::Clock,
            "stopwatch" | "elapsed" => HudMode::Stopwatch,
            "hidden" | "off" | "none" => HudMode::Hidden,
            _ => HudMode::Clock,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HudMode::Clock => "clock",
            HudMode::Stopwatch => "stopwatch",
            HudMode::Hidden => "hidden",
        }
    }
}

impl From<String> for HudMode {
    fn from(s: String) -> Self {
        Self::from_string(&s)
    }
}

/// Text shown by the stopwatch HUD; the trailing `s` has no glyph and is
/// dropped by the compositor.
pub fn stopwatch_label(seconds: f64) -> String {
    format!("{}s", seconds)
}

#[derive(Debug)]
pub struct HudController<H> {
    current: Option<H>,
}

impl<H> Default for HudController<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> HudController<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self) -> bool {
        self.current.is_some()
    }

    pub fn handle(&self) -> Option<&H> {
        self.current.as_ref()
    }

    /// Compose `text` and show it, replacing whatever was on screen.
    pub fn show_text<S>(&mut self, sink: &mut S, text: &str, x: f32, y: f32, color: u8) -> Result<(), SinkError>
    where
        S: DisplaySink<Handle = H>,
    {
        self.release(sink)?;
        let bitmap = compose(text, color);
        let handle = sink.render(&bitmap, x, y)?;
        log::debug!("hud showing {text:?} ({}px wide) at ({x}, {y})", bitmap.width());
        self.current = Some(handle);
        Ok(())
    }

    /// Show the simulated clock as `HH:MM`.
    pub fn show_time<S>(&mut self, sink: &mut S, clock: &ClockState, x: f32, y: f32, color: u8) -> Result<(), SinkError>
    where
        S: DisplaySink<Handle = H>,
    {
        self.show_text(sink, &clock.time_string(), x, y, color)
    }

    /// Show the stopwatch reading in seconds.
    pub fn show_stopwatch<S>(
        &mut self,
        sink: &mut S,
        stopwatch: &Stopwatch,
        source: &impl TimeSource,
        x: f32,
        y: f32,
        color: u8,
    ) -> Result<(), SinkError>
    where
        S: DisplaySink<Handle = H>,
    {
        let label = stopwatch_label(stopwatch.elapsed(source));
        self.show_text(sink, &label, x, y, color)
    }

    /// Remove the HUD. Does nothing when nothing is shown.
    pub fn hide<S>(&mut self, sink: &mut S) -> Result<(), SinkError>
    where
        S: DisplaySink<Handle = H>,
    {
        self.release(sink)
    }

    fn release<S>(&mut self, sink: &mut S) -> Result<(), SinkError>
    where
        S: DisplaySink<Handle = H>,
    {
        let Some(old) = self.current.as_ref() else {
            return Ok(());
        };
        match sink.clear(old) {
            Ok(()) => {}
            // Already gone on the host side; nothing left to release.
            Err(SinkError::EntityMissing) => {
                log::warn!("hud entity was destroyed outside the controller");
            }
            // Still alive: keep the handle so the next show or hide retries.
            Err(e) => return Err(e),
        }
        self.current = None;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::source::ManualClock;
    use std::collections::BTreeMap;

    /// Records every call and keeps the set of live entities.
    #[derive(Default)]
    pub(crate) struct FakeSink {
        next_id: u32,
        pub live: BTreeMap<u32, (usize, f32, f32)>,
        pub renders: usize,
        pub clears: usize,
        pub reject_next_clear: bool,
    }

    impl DisplaySink for FakeSink {
        type Handle = u32;

        fn render(&mut self, bitmap: &Bitmap, x: f32, y: f32) -> Result<u32, SinkError> {
            self.next_id += 1;
            self.renders += 1;
            self.live.insert(self.next_id, (bitmap.width(), x, y));
            Ok(self.next_id)
        }

        fn clear(&mut self, handle: &u32) -> Result<(), SinkError> {
            self.clears += 1;
            if std::mem::take(&mut self.reject_next_clear) {
                return Err(SinkError::Rejected("busy".into()));
            }
            self.live.remove(handle).map(|_| ()).ok_or(SinkError::EntityMissing)
        }
    }

    #[test]
    fn second_show_replaces_first() {
        let mut sink = FakeSink::default();
        let mut hud = HudController::new();
        let mut clock = ManualClock::default();
        let mut sw = Stopwatch::new();
        sw.start(&clock);
        clock.advance(1_500);

        hud.show_time(&mut sink, &ClockState::default(), 10.0, 20.0, 1).unwrap();
        hud.show_stopwatch(&mut sink, &sw, &clock, 30.0, 40.0, 2).unwrap();

        assert_eq!(sink.live.len(), 1);
        assert_eq!(hud.handle(), Some(&2));
        // "1.5s" -> three tiles
        assert_eq!(sink.live[&2], (15, 30.0, 40.0));
    }

    #[test]
    fn hide_is_idempotent() {
        let mut sink = FakeSink::default();
        let mut hud = HudController::new();
        hud.show_text(&mut sink, "12:00", 0.0, 0.0, 1).unwrap();
        hud.hide(&mut sink).unwrap();
        assert!(sink.live.is_empty());
        assert!(!hud.is_shown());
        hud.hide(&mut sink).unwrap();
        assert_eq!(sink.clears, 1);
    }

    #[test]
    fn externally_removed_entity_does_not_block_next_show() {
        let mut sink = FakeSink::default();
        let mut hud = HudController::new();
        hud.show_text(&mut sink, "1", 0.0, 0.0, 1).unwrap();
        sink.live.clear();
        hud.show_text(&mut sink, "2", 0.0, 0.0, 1).unwrap();
        assert_eq!(sink.live.len(), 1);
        assert!(hud.is_shown());
    }

    #[test]
    fn rejected_clear_keeps_the_handle() {
        let mut sink = FakeSink::default();
        let mut hud = HudController::new();
        hud.show_text(&mut sink, "12:00", 0.0, 0.0, 1).unwrap();

        sink.reject_next_clear = true;
        assert!(matches!(
            hud.show_text(&mut sink, "12:01", 0.0, 0.0, 1),
            Err(SinkError::Rejected(_))
        ));
        assert_eq!(hud.handle(), Some(&1));
        assert_eq!(sink.live.len(), 1);

        hud.show_text(&mut sink, "12:02", 0.0, 0.0, 1).unwrap();
        assert_eq!(sink.live.len(), 1);
        assert_eq!(hud.handle(), Some(&2));

        sink.reject_next_clear = true;
        assert!(hud.hide(&mut sink).is_err());
        assert!(hud.is_shown());
        hud.hide(&mut sink).unwrap();
        assert!(sink.live.is_empty());
        assert!(!hud.is_shown());
    }

    #[test]
    fn empty_text_still_owns_a_handle() {
        let mut sink = FakeSink::default();
        let mut hud = HudController::new();
        hud.show_text(&mut sink, "--", 0.0, 0.0, 1).unwrap();
        assert_eq!(sink.live.values().next().map(|v| v.0), Some(0));
    }

    #[test]
    fn stopwatch_label_uses_shortest_decimal() {
        assert_eq!(stopwatch_label(0.0), "0s");
        assert_eq!(stopwatch_label(3.0), "3s");
        assert_eq!(stopwatch_label(3.5), "3.5s");
        assert_eq!(stopwatch_label(12.34), "12.34s");
    }

    #[test]
    fn mode_parsing_falls_back_to_clock() {
        assert_eq!(HudMode::from_string("Stopwatch"), HudMode::Stopwatch);
        assert_eq!(HudMode::from_string("OFF"), HudMode::Hidden);
        assert_eq!(HudMode::from_string("sundial"), HudMode::Clock);
    }
}
