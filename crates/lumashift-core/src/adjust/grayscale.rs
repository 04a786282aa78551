//! Color-to-intensity conversion.

use crate::image::{ChannelLayout, Image};

/// Rec. 601 luminance weights (0.299, 0.587, 0.114) in 14-bit fixed point.
///
/// The weights sum to exactly `1 << LUMA_SHIFT`, so neutral grays map to
/// themselves and pure white stays at 255.
const LUMA_REC601_Q14: [u32; 3] = [4899, 9617, 1868];

const LUMA_SHIFT: u32 = 14;

/// Luma of a single RGB pixel, rounded half up.
///
/// ```text
/// Y = (4899·R + 9617·G + 1868·B + 2¹³) >> 14
/// ```
#[inline]
pub fn luma(rgb: [u8; 3]) -> u8 {
    let weighted = LUMA_REC601_Q14[0] * rgb[0] as u32
        + LUMA_REC601_Q14[1] * rgb[1] as u32
        + LUMA_REC601_Q14[2] * rgb[2] as u32;
    // Max is 255 << 14 before rounding, so the shifted value fits in a u8.
    ((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

/// Collapse an image to a single intensity channel.
///
/// `Luma` input is copied unchanged; alpha in `Rgba` input is discarded.
pub fn to_grayscale(image: &Image) -> Image {
    let pixels = match image.layout {
        ChannelLayout::Luma => image.pixels.clone(),
        ChannelLayout::Rgb | ChannelLayout::Rgba => image
            .pixels
            .chunks_exact(image.channels())
            .map(|px| luma([px[0], px[1], px[2]]))
            .collect(),
    };

    Image {
        width: image.width,
        height: image.height,
        layout: ChannelLayout::Luma,
        pixels,
    }
}
