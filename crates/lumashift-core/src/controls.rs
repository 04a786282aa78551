//! Mapping from an integer slider position to a brightness offset.

use serde::{Deserialize, Serialize};

/// Linear slider-to-offset mapping.
///
/// ```text
/// value = min + (progress / progress_max) × (max − min)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessControl {
    /// Offset at progress 0.
    pub min: f64,
    /// Offset at `progress_max`.
    pub max: f64,
    /// Largest slider position.
    pub progress_max: u32,
}

impl Default for BrightnessControl {
    /// Slider over 0..=100 mapped to −100.0..=0.0.
    fn default() -> Self {
        Self {
            min: -100.0,
            max: 0.0,
            progress_max: 100,
        }
    }
}

impl BrightnessControl {
    /// Offset selected by `progress`.
    ///
    /// Positions past `progress_max` are treated as `progress_max`. A control
    /// with `progress_max == 0` always yields `min`.
    pub fn value_for_progress(&self, progress: u32) -> f64 {
        if self.progress_max == 0 {
            return self.min;
        }
        let progress = progress.min(self.progress_max);
        let t = f64::from(progress) / f64::from(self.progress_max);
        self.min + t * (self.max - self.min)
    }

    /// Slider position whose offset is nearest to `value`.
    ///
    /// Values outside the control's range pin to the nearest end.
    pub fn progress_for_value(&self, value: f64) -> u32 {
        let span = self.max - self.min;
        if self.progress_max == 0 || span == 0.0 || value.is_nan() {
            return 0;
        }
        let t = ((value - self.min) / span).clamp(0.0, 1.0);
        (t * f64::from(self.progress_max)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_default_endpoints_and_midpoint() {
        let control = BrightnessControl::default();
        assert_eq!(control.value_for_progress(0), -100.0);
        assert_eq!(control.value_for_progress(100), 0.0);
        assert!((control.value_for_progress(50) - -50.0).abs() < EPSILON);
    }

    #[test]
    fn test_progress_past_range_is_clamped() {
        let control = BrightnessControl::default();
        assert_eq!(control.value_for_progress(250), 0.0);
    }

    #[test]
    fn test_zero_range_yields_min() {
        let control = BrightnessControl {
            min: -10.0,
            max: 10.0,
            progress_max: 0,
        };
        assert_eq!(control.value_for_progress(5), -10.0);
    }

    #[test]
    fn test_progress_for_default_brightness() {
        let control = BrightnessControl::default();
        assert_eq!(control.progress_for_value(-30.0), 70);
        assert_eq!(control.progress_for_value(-500.0), 0);
        assert_eq!(control.progress_for_value(12.0), 100);
    }

    #[test]
    fn test_inverted_range_maps_linearly() {
        let control = BrightnessControl {
            min: 50.0,
            max: -50.0,
            progress_max: 10,
        };
        assert!((control.value_for_progress(3) - 20.0).abs() < EPSILON);
        assert_eq!(control.progress_for_value(20.0), 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let control: BrightnessControl = serde_json::from_str(r#"{"min": -50.0}"#).unwrap();
        assert_eq!(control.max, 0.0);
        assert_eq!(control.progress_max, 100);
        assert_eq!(control.value_for_progress(0), -50.0);
    }
}
