use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::tui::theme::Theme;

/// Application configuration, loaded from config.toml.
///
/// Every section carries `#[serde(default)]`, so a partial file (or no file
/// at all) falls back to the values from the Default implementations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub timer: TimerConfig,
    pub voice: VoiceConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Milliseconds between countdown ticks.
    pub tick_ms: u64,
    /// Name of the workout the catalog starts with.
    pub default_workout: String,
    /// Duration of the starting workout, in minutes.
    pub default_minutes: u32,
    /// Length of the progress ring's stroke.
    pub ring_circumference: f64,
}

/// Which voice backend announces the 3-2-1 countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceBackend {
    /// External text-to-speech command (espeak-ng, espeak, spd-say, say)
    Speech,
    /// Short beeps through the default audio output
    Tone,
    Off,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub backend: VoiceBackend,
    /// Speech command override. When unset the first one found on PATH is used.
    pub command: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter level for the log file. `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            default_workout: "Workout".into(),
            default_minutes: 1,
            ring_circumference: 440.0,
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            backend: VoiceBackend::Speech,
            command: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl TimerConfig {
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Load the application config from $XDG_CONFIG_HOME/liftclock/config.toml.
/// If the file doesn't exist, returns defaults.
pub fn load_config() -> Result<AppConfig> {
    let path = paths::config_file();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
