use bevy::{log::LogPlugin, prelude::*};
use clap::Parser;

use timehud::config::Config;
use timehud::{HudMode, TimeHudPlugin};

/// Simulated clock, countdown timer and stopwatch with a pixel-glyph HUD.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a TOML config (defaults to ./timehud.toml)
    #[arg(long)]
    config: Option<String>,
    /// HUD mode override: clock, stopwatch or hidden
    #[arg(long)]
    mode: Option<String>,
    /// Countdown length in seconds for the start-timer key
    #[arg(long)]
    timer: Option<f64>,
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn print_controls() {
    println!("\n⏱  CONTROLS:");
    println!("  T - Start countdown timer");
    println!("  P / U - Pause / unpause timer");
    println!("  X - Stop timer");
    println!("  S - Start (restart) stopwatch, Shift+S - stop it");
    println!("  C - Clock HUD, W - Stopwatch HUD, H - Hide HUD");
    println!("  Arrow keys - Adjust simulated hour/minute");
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref());
    if let Some(mode) = args.mode.as_deref() {
        config.hud.mode = HudMode::from_string(mode);
    }
    if let Some(seconds) = args.timer {
        config.timer.seconds = seconds;
    }
    log::info!(
        "hud mode {}, timer {:.2}s, clock {:02}:{:02}",
        config.hud.mode.name(),
        config.timer.seconds,
        config.clock.hour,
        config.clock.minute
    );
    print_controls();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window.title.clone(),
                        resolution: (config.window.width, config.window.height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                // Glyph pixels stay crisp when scaled up.
                .set(ImagePlugin::default_nearest())
                // env_logger already owns the global logger.
                .disable::<LogPlugin>(),
        )
        .add_plugins(TimeHudPlugin::new(config))
        .add_systems(Startup, setup_camera)
        .run();
}
