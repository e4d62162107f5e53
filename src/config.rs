//! Configuration loader for timehud.
//!
//! * Looks for `timehud.toml` in the cwd unless overridden by `--config`.
//! * Provides defaults so the file (and any section of it) is optional.

use serde::Deserialize;
use std::fs;

use crate::hud::HudMode;

pub const DEFAULT_CONFIG_PATH: &str = "timehud.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            title: "timehud".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HudConfig {
    pub mode: HudMode,
    /// Sprite centre, window pixels from the top-left corner.
    pub x: f32,
    pub y: f32,
    /// Palette index (0-15).
    pub color: u8,
    /// On-screen pixels per glyph pixel.
    pub scale: f32,
    /// Seconds between HUD rebuilds.
    pub refresh_secs: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            mode: HudMode::Clock,
            x: 80.0,
            y: 40.0,
            color: 1,
            scale: 4.0,
            refresh_secs: 0.1,
        }
    }
}

/// Initial simulated clock; fed through the normalising setters.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    pub hour: i64,
    pub minute: i64,
    pub day: i64,
    pub month: i64,
    pub year: i32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            hour: 0,
            minute: 0,
            day: 1,
            month: 1,
            year: 2025,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TimerConfig {
    /// Countdown length used by the start-timer key.
    pub seconds: f64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { seconds: 60.0 }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub hud: HudConfig,
    pub clock: ClockConfig,
    pub timer: TimerConfig,
}

impl Config {
    /// Strict parse of a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Strict load from `path`.
    pub fn read(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load from a TOML file; fall back to defaults on any error.
    pub fn load(path: Option<&str>) -> Self {
        let p = path.unwrap_or(DEFAULT_CONFIG_PATH);
        match Self::read(p) {
            Ok(config) => {
                log::info!("loaded config from {p}");
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound && path.is_none() => {
                log::debug!("no {p}, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("{p}: {e}; using defaults");
                Self::default()
            }
        }
    }
}
