//! User configuration — scroll feel and effect toggles.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/scrollterm/config.toml` (default `~/.config/scrollterm/config.toml`).

use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Scroll settle rate in 1/s — higher snaps harder to the target.
    pub scroll_speed: f32,
    /// Pixels scrolled per mouse wheel notch.
    pub wheel_step_px: f32,
    /// Quiet window before a resize burst rebuilds the page, in milliseconds.
    pub debounce_ms: u64,
    /// Enables the highlight and tagline reveals.
    pub text_effects: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 6.0,
            wheel_step_px: 96.0,
            debounce_ms: 250,
            text_effects: true,
        }
    }
}

impl AppConfig {
    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        match std::fs::read_to_string(config_path()) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "scroll_speed" => {
                    if let Ok(v) = value.parse::<f32>() {
                        config.scroll_speed = v.clamp(0.5, 20.0);
                    }
                }
                "wheel_step_px" => {
                    if let Ok(v) = value.parse::<f32>() {
                        config.wheel_step_px = v.clamp(16.0, 400.0);
                    }
                }
                "debounce_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        // Keep this bounded for predictable UX.
                        config.debounce_ms = v.clamp(100, 1000);
                    }
                }
                "text_effects" => {
                    config.text_effects = value == "true";
                }
                _ => {}
            }
        }

        config
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/scrollterm/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("scrollterm").join("config.toml")
}
