use bevy::prelude::*;

use crate::config::Config;
use crate::hud::{stopwatch_label, HudMode};
use crate::source::{ManualClock, TimeSource};
use crate::sprite_sink::WorldSink;
use crate::TimeKit;

/// The session's [`TimeKit`], HUD entities being Bevy entities.
#[derive(Resource, Default)]
pub struct HudKit(pub TimeKit<Entity>);

/// Runtime HUD options, seeded from [`Config`] and changed by key bindings.
#[derive(Resource, Clone, Debug)]
pub struct HudSettings {
    pub mode: HudMode,
    pub x: f32,
    pub y: f32,
    pub color: u8,
    pub scale: f32,
    pub viewport: Vec2,
    pub timer_seconds: f64,
    /// Rebuild on the next refresh regardless of the interval.
    pub dirty: bool,
}

impl HudSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: config.hud.mode,
            x: config.hud.x,
            y: config.hud.y,
            color: config.hud.color,
            scale: config.hud.scale,
            viewport: Vec2::new(config.window.width, config.window.height),
            timer_seconds: config.timer.seconds,
            dirty: true,
        }
    }
}

#[derive(Resource)]
struct HudRefresh {
    interval: Timer,
    timer_was_running: bool,
    /// Text currently on screen, to skip rebuilding an identical sprite.
    shown_label: Option<String>,
}

/// Installs the time HUD: resources, key bindings and periodic HUD refresh.
pub struct TimeHudPlugin {
    pub config: Config,
}

impl TimeHudPlugin {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Plugin for TimeHudPlugin {
    fn build(&self, app: &mut App) {
        let refresh = self.config.hud.refresh_secs.max(0.01);
        app.insert_resource(HudSettings::from_config(&self.config))
            .insert_resource(HudKit(TimeKit::from_config(&self.config.clock)))
            .insert_resource(HudRefresh {
                interval: Timer::from_seconds(refresh, TimerMode::Repeating),
                timer_was_running: false,
                shown_label: None,
            })
            .add_systems(Update, (handle_time_keys, refresh_hud.after(handle_time_keys)));
    }
}

/// Keyboard controls for timer, stopwatch, simulated clock and HUD mode.
pub fn handle_time_keys(
    keys: Res<ButtonInput<KeyCode>>,
    real: Res<Time<Real>>,
    mut kit: ResMut<HudKit>,
    mut settings: ResMut<HudSettings>,
) {
    let now = &*real;
    let kit = &mut kit.0;
    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    if keys.just_pressed(KeyCode::KeyT) {
        kit.start_timer(now, settings.timer_seconds);
        log::info!("timer started for {:.2}s", settings.timer_seconds);
    }
    if keys.just_pressed(KeyCode::KeyP) {
        // Sample first so the span up to the pause is charged.
        kit.timer_left(now);
        kit.pause_timer();
    }
    if keys.just_pressed(KeyCode::KeyU) {
        kit.unpause_timer(now);
    }
    if keys.just_pressed(KeyCode::KeyX) {
        kit.stop_timer();
    }
    if keys.just_pressed(KeyCode::KeyS) {
        if shift {
            kit.stop_stopwatch();
        } else {
            kit.start_stopwatch(now);
        }
        settings.dirty = true;
    }

    let (hour, minute) = (kit.clock().hour() as i64, kit.clock().minute() as i64);
    let mut nudged = None;
    if keys.just_pressed(KeyCode::ArrowUp) {
        nudged = Some((hour + 1, minute));
    } else if keys.just_pressed(KeyCode::ArrowDown) {
        nudged = Some((hour - 1, minute));
    } else if keys.just_pressed(KeyCode::ArrowRight) {
        nudged = Some((hour, minute + 1));
    } else if keys.just_pressed(KeyCode::ArrowLeft) {
        nudged = Some((hour, minute - 1));
    }
    if let Some((h, m)) = nudged {
        kit.set_time(h, m);
        settings.dirty = true;
    }

    let mode = if keys.just_pressed(KeyCode::KeyC) {
        Some(HudMode::Clock)
    } else if keys.just_pressed(KeyCode::KeyW) {
        Some(HudMode::Stopwatch)
    } else if keys.just_pressed(KeyCode::KeyH) {
        Some(HudMode::Hidden)
    } else {
        None
    };
    if let Some(mode) = mode {
        log::debug!("hud mode -> {}", mode.name());
        settings.mode = mode;
        settings.dirty = true;
    }
}

/// Rebuild the HUD sprite every refresh interval when its text changed, or
/// right away when settings are dirty.
pub fn refresh_hud(world: &mut World) {
    let delta = world.resource::<Time>().delta();
    let now = ManualClock::at(world.resource::<Time<Real>>().now_millis());

    let due = world.resource_mut::<HudRefresh>().interval.tick(delta).just_finished();
    let settings = world.resource::<HudSettings>().clone();
    if !due && !settings.dirty {
        return;
    }
    world.resource_mut::<HudSettings>().dirty = false;

    world.resource_scope(|world, mut refresh: Mut<HudRefresh>| {
        world.resource_scope(|world, mut kit: Mut<HudKit>| {
            let kit = &mut kit.0;

            let running = kit.timer().is_running();
            let left = kit.timer_left(&now);
            if refresh.timer_was_running && !kit.timer().is_running() {
                log::info!("timer finished");
            } else if running {
                log::trace!("timer: {left:.2}s left");
            }
            refresh.timer_was_running = kit.timer().is_running();

            let label = match settings.mode {
                HudMode::Clock => Some(kit.clock_time()),
                HudMode::Stopwatch => Some(stopwatch_label(kit.stopwatch_elapsed(&now))),
                HudMode::Hidden => None,
            };
            if !settings.dirty && label.is_some() && label == refresh.shown_label && kit.hud().is_shown() {
                return;
            }

            let mut sink = WorldSink::new(world, settings.viewport, settings.scale);
            let shown = match settings.mode {
                HudMode::Clock => kit.show_time_hud(&mut sink, settings.x, settings.y, settings.color),
                HudMode::Stopwatch => {
                    kit.show_stopwatch_hud(&mut sink, &now, settings.x, settings.y, settings.color)
                }
                HudMode::Hidden => kit.hide_hud(&mut sink),
            };
            refresh.shown_label = match shown {
                Ok(()) => label,
                Err(e) => {
                    log::warn!("hud refresh failed: {e}");
                    None
                }
            };
        });
    });
}
