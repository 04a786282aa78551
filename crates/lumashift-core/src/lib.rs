//! Lumashift Core — domain layer for on-the-fly photo adjustment.
//!
//! This crate contains the pixel transform (grayscale conversion plus a
//! saturating brightness offset), the slider mapping that parameterizes it,
//! and the event-driven session that re-renders on every control change.
//! No UI or framework dependencies.

pub mod adjust;
pub mod controls;
pub mod display;
pub mod error;
pub mod image;
pub mod session;
pub mod transform;

// Re-exports for convenience.
pub use controls::BrightnessControl;
pub use display::Rgb565Frame;
pub use error::TransformError;
pub use image::{ChannelLayout, Image};
pub use session::{ControlEvent, EditorSession};
pub use transform::evaluate::{transform, transform_with};
pub use transform::params::ControlState;
