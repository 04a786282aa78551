//! Editor session — owns the acquired image and current control state.
//!
//! Every control change arrives as a [`ControlEvent`]. The session is the
//! ONLY place control state changes; each event that leaves an image in
//! place produces a fresh render from the latest snapshot.

use crate::controls::BrightnessControl;
use crate::error::TransformError;
use crate::image::Image;
use crate::transform::evaluate::transform_with;
use crate::transform::params::ControlState;

/// Events that trigger a re-render.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// A new source image was picked or captured.
    ImageAcquired(Image),
    /// The brightness slider moved to `progress`.
    BrightnessChanged { progress: u32 },
    /// The grayscale toggle was switched.
    GrayscaleToggled(bool),
}

/// Owned screen state: the slider mapping, the control snapshot, and the
/// image acquired so far (if any).
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    control: BrightnessControl,
    state: ControlState,
    image: Option<Image>,
}

impl EditorSession {
    /// Start an empty session with the given slider mapping and initial state.
    pub fn new(control: BrightnessControl, state: ControlState) -> Self {
        Self {
            control,
            state,
            image: None,
        }
    }

    /// Apply `event` and re-render.
    ///
    /// Returns `Ok(None)` when a control changed before any image was
    /// acquired; the engine is not invoked in that case.
    ///
    /// # Errors
    ///
    /// [`TransformError::InvalidInput`] if an acquired image is invalid. The
    /// previously held image is kept.
    pub fn handle(&mut self, event: ControlEvent) -> Result<Option<Image>, TransformError> {
        match event {
            ControlEvent::ImageAcquired(image) => {
                image.validate()?;
                tracing::debug!(
                    "image acquired: {}x{} {}",
                    image.width,
                    image.height,
                    image.layout
                );
                self.image = Some(image);
            }
            ControlEvent::BrightnessChanged { progress } => {
                self.state.brightness = self.control.value_for_progress(progress);
                tracing::trace!(progress, brightness = self.state.brightness, "brightness changed");
            }
            ControlEvent::GrayscaleToggled(enabled) => {
                self.state.grayscale = enabled;
                tracing::trace!(enabled, "grayscale toggled");
            }
        }

        if self.image.is_none() {
            tracing::debug!("control changed before an image was acquired");
            return Ok(None);
        }
        self.render().map(Some)
    }

    /// Transform the held image with the current control state.
    ///
    /// # Errors
    ///
    /// [`TransformError::InvalidInput`] when no image has been acquired.
    pub fn render(&self) -> Result<Image, TransformError> {
        let image = self
            .image
            .as_ref()
            .ok_or_else(|| TransformError::invalid("no image has been acquired"))?;
        transform_with(image, &self.state)
    }

    /// Current control snapshot.
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Slider mapping used for brightness events.
    pub fn control(&self) -> &BrightnessControl {
        &self.control
    }

    /// The most recently acquired image.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ChannelLayout;

    fn white() -> Image {
        Image::from_pixel(2, 2, ChannelLayout::Rgb, &[255, 255, 255]).unwrap()
    }

    #[test]
    fn test_controls_before_image_do_not_render() {
        let mut session = EditorSession::default();
        let out = session
            .handle(ControlEvent::BrightnessChanged { progress: 50 })
            .unwrap();
        assert!(out.is_none());
        assert_eq!(session.state().brightness, -50.0);
        assert!(session.handle(ControlEvent::GrayscaleToggled(true)).unwrap().is_none());
    }

    #[test]
    fn test_render_without_image_is_invalid_input() {
        let session = EditorSession::default();
        assert!(matches!(session.render(), Err(TransformError::InvalidInput(_))));
    }

    #[test]
    fn test_acquire_renders_with_default_state() {
        let mut session = EditorSession::default();
        let out = session.handle(ControlEvent::ImageAcquired(white())).unwrap().unwrap();
        // Default brightness is -30.
        assert!(out.pixels.iter().all(|&v| v == 225));
    }

    #[test]
    fn test_each_event_uses_latest_snapshot() {
        let mut session = EditorSession::default();
        session.handle(ControlEvent::ImageAcquired(white())).unwrap();

        let out = session
            .handle(ControlEvent::BrightnessChanged { progress: 0 })
            .unwrap()
            .unwrap();
        assert_eq!(out.layout, ChannelLayout::Rgb);
        assert!(out.pixels.iter().all(|&v| v == 155));

        let out = session.handle(ControlEvent::GrayscaleToggled(true)).unwrap().unwrap();
        assert_eq!(out.layout, ChannelLayout::Luma);
        assert_eq!(out.pixels, vec![155; 4]);

        let out = session
            .handle(ControlEvent::BrightnessChanged { progress: 100 })
            .unwrap()
            .unwrap();
        assert_eq!(out.pixels, vec![255; 4]);
    }

    #[test]
    fn test_invalid_image_keeps_previous() {
        let mut session = EditorSession::default();
        session.handle(ControlEvent::ImageAcquired(white())).unwrap();
        let bad = Image {
            width: 0,
            height: 3,
            layout: ChannelLayout::Luma,
            pixels: Vec::new(),
        };
        assert!(session.handle(ControlEvent::ImageAcquired(bad)).is_err());
        assert_eq!(session.image(), Some(&white()));
    }

    #[test]
    fn test_custom_control_mapping() {
        let control = BrightnessControl {
            min: -200.0,
            max: 0.0,
            progress_max: 10,
        };
        let mut session = EditorSession::new(control, ControlState::new(0.0, false));
        session.handle(ControlEvent::ImageAcquired(white())).unwrap();
        let out = session
            .handle(ControlEvent::BrightnessChanged { progress: 5 })
            .unwrap()
            .unwrap();
        assert!(out.pixels.iter().all(|&v| v == 155));
    }
}
