//! RGB565 frames for 16-bit display surfaces.

use crate::image::{ChannelLayout, Image};

/// Packed 5-6-5 frame, one `u16` per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgb565Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u16>,
}

impl Rgb565Frame {
    /// Pack `image` for display. Intensity images are replicated into all
    /// three channels; alpha is ignored.
    pub fn from_image(image: &Image) -> Self {
        let data = match image.layout {
            ChannelLayout::Luma => image.pixels.iter().map(|&v| pack_rgb565(v, v, v)).collect(),
            ChannelLayout::Rgb | ChannelLayout::Rgba => image
                .pixels
                .chunks_exact(image.channels())
                .map(|px| pack_rgb565(px[0], px[1], px[2]))
                .collect(),
        };
        Self {
            width: image.width,
            height: image.height,
            data,
        }
    }

    /// Native-endian byte view, as handed to a framebuffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

/// `((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3)`
#[inline]
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    (u16::from(r >> 3) << 11) | (u16::from(g >> 2) << 5) | u16::from(b >> 3)
}
