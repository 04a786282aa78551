//! Per-pixel adjustments — grayscale conversion and brightness offset.

pub mod brightness;
pub mod grayscale;
