//! Image loading and saving for the demo application.

use std::path::Path;

use lumashift_core::{Image, Rgb565Frame, TransformError};

/// Load an image from disk and convert to the internal 8-bit `Image` format.
///
/// Supports common formats via the `image` crate (PNG, JPEG, ...).
/// Gray sources stay single-channel; color sources keep alpha if present.
pub fn load_image(path: &Path) -> Result<Image, ImageLoadError> {
    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    let image = Image::from_dynamic(&img)?;
    tracing::info!(
        "loaded {}: {}x{} {}",
        path.display(),
        image.width,
        image.height,
        image.layout
    );
    Ok(image)
}

/// Encode `image` to disk; the format follows the file extension.
pub fn save_image(image: &Image, path: &Path) -> Result<(), ImageLoadError> {
    image
        .to_dynamic()?
        .save(path)
        .map_err(ImageLoadError::Encode)?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

/// Write the raw RGB565 frame a 16-bit display surface would receive.
pub fn save_rgb565(image: &Image, path: &Path) -> Result<(), ImageLoadError> {
    let frame = Rgb565Frame::from_image(image);
    std::fs::write(path, frame.as_bytes())?;
    tracing::info!(
        "wrote {}x{} RGB565 frame to {}",
        frame.width,
        frame.height,
        path.display()
    );
    Ok(())
}

/// Errors that can occur during image loading and saving.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error(transparent)]
    Invalid(#[from] TransformError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
