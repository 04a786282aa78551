//! Core transform evaluation — grayscale collapse followed by brightness.

use crate::adjust::brightness::apply_brightness;
use crate::adjust::grayscale::to_grayscale;
use crate::error::TransformError;
use crate::image::Image;
use crate::transform::params::ControlState;

/// The core function.
///
/// Applies the adjustment chain to a copy of `source`:
/// 1. Grayscale collapse to a single channel (only when `grayscale`)
/// 2. Additive brightness offset, saturated per channel
///
/// The result has the same dimensions as `source`; its layout is `Luma` on
/// the grayscale path and the source layout otherwise. `source` is never
/// modified and never shares storage with the result.
///
/// `brightness` is taken as given. Out-of-range offsets only saturate more
/// channels.
///
/// # Errors
///
/// Returns [`TransformError::InvalidInput`] when `source` has zero area or a
/// pixel buffer that does not match its dimensions.
pub fn transform(source: &Image, brightness: f64, grayscale: bool) -> Result<Image, TransformError> {
    source.validate()?;

    tracing::debug!(
        width = source.width,
        height = source.height,
        layout = %source.layout,
        brightness,
        grayscale,
        "transforming image"
    );

    let mut output = if grayscale {
        to_grayscale(source)
    } else {
        source.clone()
    };
    apply_brightness(&mut output, brightness);
    Ok(output)
}

/// [`transform`] driven by a control snapshot.
pub fn transform_with(source: &Image, state: &ControlState) -> Result<Image, TransformError> {
    transform(source, state.brightness, state.grayscale)
}
