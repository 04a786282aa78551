//! Image representation for the adjustment pipeline.

use std::fmt;

use ::image::{ColorType, DynamicImage, GrayImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Channel layout shared by every pixel of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// One 8-bit intensity channel.
    Luma,
    /// Three 8-bit color channels.
    Rgb,
    /// Three 8-bit color channels followed by 8-bit alpha.
    Rgba,
}

impl ChannelLayout {
    /// Number of interleaved channels per pixel.
    pub const fn channels(self) -> usize {
        match self {
            Self::Luma => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Number of leading channels that carry intensity or color.
    ///
    /// Alpha is never adjusted, so for `Rgba` this is 3.
    pub const fn color_channels(self) -> usize {
        match self {
            Self::Luma => 1,
            Self::Rgb | Self::Rgba => 3,
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Luma => write!(f, "grayscale"),
            Self::Rgb => write!(f, "RGB"),
            Self::Rgba => write!(f, "RGBA"),
        }
    }
}

/// Decoded 8-bit image, stored interleaved and row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of every pixel.
    pub layout: ChannelLayout,
    /// Pixel data, `width * height * layout.channels()` bytes.
    pub pixels: Vec<u8>,
}

impl Image {
    /// Build an image from raw interleaved bytes, checking the invariants.
    pub fn new(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        pixels: Vec<u8>,
    ) -> Result<Self, TransformError> {
        let image = Self {
            width,
            height,
            layout,
            pixels,
        };
        image.validate()?;
        Ok(image)
    }

    /// Build an image where every pixel equals `pixel`.
    ///
    /// `pixel` must hold exactly `layout.channels()` values.
    pub fn from_pixel(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        pixel: &[u8],
    ) -> Result<Self, TransformError> {
        if pixel.len() != layout.channels() {
            return Err(TransformError::invalid(format!(
                "{layout} pixel needs {} channels, got {}",
                layout.channels(),
                pixel.len()
            )));
        }
        let count = pixel_count(width, height)
            .ok_or_else(|| TransformError::invalid("image dimensions overflow"))?;
        Self::new(width, height, layout, pixel.repeat(count))
    }

    /// Check that the image has positive area and a buffer matching its layout.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.width == 0 || self.height == 0 {
            return Err(TransformError::invalid(format!(
                "image has zero area ({}x{})",
                self.width, self.height
            )));
        }
        let expected = pixel_count(self.width, self.height)
            .and_then(|n| n.checked_mul(self.layout.channels()))
            .ok_or_else(|| TransformError::invalid("image dimensions overflow"))?;
        if self.pixels.len() != expected {
            return Err(TransformError::invalid(format!(
                "{}x{} {} image needs {expected} bytes, buffer holds {}",
                self.width,
                self.height,
                self.layout,
                self.pixels.len()
            )));
        }
        Ok(())
    }

    /// Number of interleaved channels per pixel.
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Channel values of the pixel at `(x, y)`.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        let c = self.channels();
        let start = (y as usize * self.width as usize + x as usize) * c;
        &self.pixels[start..start + c]
    }

    /// Convert a decoded `image` crate buffer into the internal 8-bit form.
    ///
    /// Gray sources stay single-channel (alpha dropped), other sources keep
    /// alpha when they have it. Deeper bit depths are reduced to 8 bits.
    pub fn from_dynamic(img: &DynamicImage) -> Result<Self, TransformError> {
        let (width, height) = (img.width(), img.height());
        let (layout, pixels) = match img.color() {
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => {
                (ChannelLayout::Luma, img.to_luma8().into_raw())
            }
            color if color.has_alpha() => (ChannelLayout::Rgba, img.to_rgba8().into_raw()),
            _ => (ChannelLayout::Rgb, img.to_rgb8().into_raw()),
        };
        Self::new(width, height, layout, pixels)
    }

    /// Convert into an `image` crate buffer for encoding or display.
    pub fn into_dynamic(self) -> Result<DynamicImage, TransformError> {
        let (width, height, layout) = (self.width, self.height, self.layout);
        let converted = match layout {
            ChannelLayout::Luma => {
                GrayImage::from_raw(width, height, self.pixels).map(DynamicImage::ImageLuma8)
            }
            ChannelLayout::Rgb => {
                RgbImage::from_raw(width, height, self.pixels).map(DynamicImage::ImageRgb8)
            }
            ChannelLayout::Rgba => {
                RgbaImage::from_raw(width, height, self.pixels).map(DynamicImage::ImageRgba8)
            }
        };
        converted.ok_or_else(|| {
            TransformError::invalid(format!(
                "pixel buffer too small for {width}x{height} {layout} image"
            ))
        })
    }

    /// Borrowing variant of [`Image::into_dynamic`].
    pub fn to_dynamic(&self) -> Result<DynamicImage, TransformError> {
        self.clone().into_dynamic()
    }
}

fn pixel_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_area() {
        let err = Image::new(0, 4, ChannelLayout::Rgb, Vec::new()).unwrap_err();
        assert!(matches!(err, TransformError::InvalidInput(_)));
        assert!(Image::new(4, 0, ChannelLayout::Luma, Vec::new()).is_err());
    }

    #[test]
    fn test_new_rejects_mismatched_buffer() {
        assert!(Image::new(2, 2, ChannelLayout::Rgb, vec![0; 11]).is_err());
        assert!(Image::new(2, 2, ChannelLayout::Rgb, vec![0; 12]).is_ok());
    }

    #[test]
    fn test_validate_catches_hand_built_image() {
        let image = Image {
            width: 3,
            height: 1,
            layout: ChannelLayout::Rgba,
            pixels: vec![0; 4],
        };
        assert!(image.validate().is_err());
    }

    #[test]
    fn test_from_pixel_fills_every_pixel() {
        let image = Image::from_pixel(3, 2, ChannelLayout::Rgb, &[10, 20, 30]).unwrap();
        assert_eq!(image.pixels.len(), 18);
        assert_eq!(image.pixel(2, 1), &[10, 20, 30]);
    }

    #[test]
    fn test_from_pixel_rejects_wrong_channel_count() {
        assert!(Image::from_pixel(1, 1, ChannelLayout::Luma, &[1, 2]).is_err());
    }

    #[test]
    fn test_pixel_indexing_is_row_major() {
        let image = Image::new(2, 2, ChannelLayout::Luma, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(image.pixel(1, 0), &[2]);
        assert_eq!(image.pixel(0, 1), &[3]);
    }

    #[test]
    fn test_dynamic_round_trip_keeps_layout() {
        let source = Image::new(2, 1, ChannelLayout::Rgba, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let dynamic = source.to_dynamic().unwrap();
        assert_eq!(dynamic.color(), ColorType::Rgba8);
        assert_eq!(Image::from_dynamic(&dynamic).unwrap(), source);
    }

    #[test]
    fn test_from_dynamic_gray_alpha_becomes_luma() {
        let buf = ::image::GrayAlphaImage::from_pixel(2, 2, ::image::LumaA([90, 10]));
        let image = Image::from_dynamic(&DynamicImage::ImageLumaA8(buf)).unwrap();
        assert_eq!(image.layout, ChannelLayout::Luma);
        assert_eq!(image.pixels, vec![90; 4]);
    }

    #[test]
    fn test_from_dynamic_rejects_empty() {
        let empty = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        assert!(Image::from_dynamic(&empty).is_err());
    }
}
