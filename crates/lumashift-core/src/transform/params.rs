//! Control snapshot that parameterizes a single transform call.
//!
//! `ControlState` is owned and mutated by whoever drives the controls; the
//! engine only reads a copy per call.

use serde::{Deserialize, Serialize};

/// Brightness offset used when a caller does not supply one.
pub const DEFAULT_BRIGHTNESS: f64 = -30.0;

/// Grayscale flag used when a caller does not supply one.
pub const DEFAULT_GRAYSCALE: bool = false;

/// Current selection of the two adjustment controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlState {
    /// Additive intensity offset applied to every channel. Not clamped.
    pub brightness: f64,
    /// `true` collapses the image to a single intensity channel first.
    pub grayscale: bool,
}

impl ControlState {
    pub const fn new(brightness: f64, grayscale: bool) -> Self {
        Self {
            brightness,
            grayscale,
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS, DEFAULT_GRAYSCALE)
    }
}
