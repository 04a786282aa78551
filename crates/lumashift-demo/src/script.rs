//! Scripted control events for driving a session without a UI.
//!
//! A script is a JSON array of commands using the
//! `#[serde(tag = "type", content = "data")]` layout, e.g.
//!
//! ```json
//! [
//!   { "type": "LoadImage", "data": { "path": "photo.jpg" } },
//!   { "type": "SetBrightness", "data": { "progress": 40 } },
//!   { "type": "SetGrayscale", "data": { "enabled": true } },
//!   { "type": "Export", "data": { "path": "out.png" } }
//! ]
//! ```

use std::path::{Path, PathBuf};

use lumashift_core::{ControlEvent, EditorSession, Image, TransformError};
use serde::{Deserialize, Serialize};

use crate::image_loader::{self, ImageLoadError};

/// One step of a control script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DemoCommand {
    /// Acquire a source image from disk.
    LoadImage {
        /// File path to the image.
        path: PathBuf,
    },

    /// Move the brightness slider.
    SetBrightness {
        /// Slider position.
        progress: u32,
    },

    /// Switch the grayscale toggle.
    SetGrayscale {
        /// New toggle state.
        enabled: bool,
    },

    /// Write the currently displayed image.
    Export {
        /// Destination; the format follows the extension.
        path: PathBuf,
    },
}

/// Parse a script from JSON text.
pub fn parse_script(text: &str) -> Result<Vec<DemoCommand>, ScriptError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<DemoCommand>, ScriptError> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text)
}

/// Feeds commands into an [`EditorSession`] and keeps the latest render,
/// standing in for the display surface.
#[derive(Debug)]
pub struct ScriptPlayer {
    session: EditorSession,
    displayed: Option<Image>,
}

impl ScriptPlayer {
    pub fn new(session: EditorSession) -> Self {
        Self {
            session,
            displayed: None,
        }
    }

    /// Run one command.
    pub fn apply(&mut self, command: DemoCommand) -> Result<(), ScriptError> {
        let event = match command {
            DemoCommand::LoadImage { path } => {
                ControlEvent::ImageAcquired(image_loader::load_image(&path)?)
            }
            DemoCommand::SetBrightness { progress } => ControlEvent::BrightnessChanged { progress },
            DemoCommand::SetGrayscale { enabled } => ControlEvent::GrayscaleToggled(enabled),
            DemoCommand::Export { path } => {
                let image = self.displayed.as_ref().ok_or(ScriptError::NothingToExport)?;
                image_loader::save_image(image, &path)?;
                return Ok(());
            }
        };

        if let Some(rendered) = self.session.handle(event)? {
            self.displayed = Some(rendered);
        }
        Ok(())
    }

    /// Run every command in order, stopping at the first failure.
    pub fn run(&mut self, commands: impl IntoIterator<Item = DemoCommand>) -> Result<(), ScriptError> {
        for command in commands {
            tracing::debug!("running {command:?}");
            self.apply(command)?;
        }
        Ok(())
    }

    /// Image most recently handed to the display.
    pub fn displayed(&self) -> Option<&Image> {
        self.displayed.as_ref()
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }
}

/// Errors that can occur while loading or running a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid script JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Image(#[from] ImageLoadError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("nothing to export: no image has been displayed yet")]
    NothingToExport,
}
