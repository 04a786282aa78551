//! Application configuration for the demo.

use std::path::Path;

use lumashift_core::{BrightnessControl, ControlState};
use serde::{Deserialize, Serialize};

/// Slider position whose offset matches the engine's documented default.
const DEFAULT_PROGRESS: u32 = 70;

/// Runtime configuration for the Lumashift demo.
///
/// Resolved in order: JSON file, then `LUMASHIFT_*` environment variables,
/// then command-line flags (applied by `main`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Slider-to-offset mapping.
    pub brightness: BrightnessControl,
    /// Slider position before any brightness event.
    pub initial_progress: u32,
    /// Grayscale toggle before any toggle event.
    pub grayscale: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            brightness: BrightnessControl::default(),
            initial_progress: DEFAULT_PROGRESS,
            grayscale: false,
        }
    }
}

impl DemoConfig {
    /// Read the optional JSON file and apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                let config = serde_json::from_str(&text)?;
                tracing::info!("loaded config from {}", path.display());
                config
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `LUMASHIFT_PROGRESS` and `LUMASHIFT_GRAYSCALE` from `lookup`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup("LUMASHIFT_PROGRESS") {
            match raw.trim().parse() {
                Ok(progress) => self.initial_progress = progress,
                Err(_) => tracing::warn!("ignoring LUMASHIFT_PROGRESS={raw}: not a slider position"),
            }
        }
        if let Some(raw) = lookup("LUMASHIFT_GRAYSCALE") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.grayscale = true,
                "0" | "false" | "no" | "off" => self.grayscale = false,
                _ => tracing::warn!("ignoring LUMASHIFT_GRAYSCALE={raw}: not a boolean"),
            }
        }
    }

    /// Control snapshot the session starts from.
    pub fn initial_state(&self) -> ControlState {
        ControlState::new(
            self.brightness.value_for_progress(self.initial_progress),
            self.grayscale,
        )
    }
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
