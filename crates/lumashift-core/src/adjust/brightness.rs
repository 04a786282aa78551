//! Uniform additive brightness with per-channel saturation.

use crate::image::Image;

/// Add `offset` to one 8-bit channel value.
///
/// ```text
/// out = clamp(round(in + offset), 0, 255)
/// ```
///
/// Rounding is half-to-even. The offset is not scaled or gamma-corrected.
/// Infinite offsets saturate to the matching end of the range; `NaN`
/// yields 0.
#[inline]
pub fn offset_channel(value: u8, offset: f64) -> u8 {
    (f64::from(value) + offset).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Lookup table mapping every 8-bit input to its offset output.
pub fn offset_table(offset: f64) -> [u8; 256] {
    std::array::from_fn(|v| offset_channel(v as u8, offset))
}

/// Apply `offset` to every color or intensity channel of `image` in place.
///
/// Alpha channels are left untouched. `offset = 0.0` produces no change.
pub fn apply_brightness(image: &mut Image, offset: f64) {
    if offset == 0.0 {
        return;
    }

    let table = offset_table(offset);
    let color = image.layout.color_channels();
    let channels = image.channels();

    if color == channels {
        for v in image.pixels.iter_mut() {
            *v = table[*v as usize];
        }
    } else {
        for px in image.pixels.chunks_exact_mut(channels) {
            for v in &mut px[..color] {
                *v = table[*v as usize];
            }
        }
    }
}
