//! Lumashift Demo — headless driver for the adjustment engine.
//!
//! Acquires an image from disk, replays brightness/grayscale control events
//! through an `EditorSession`, and writes what the display would show.

mod config;
mod image_loader;
mod script;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lumashift_core::EditorSession;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, DemoConfig};
use crate::image_loader::ImageLoadError;
use crate::script::{DemoCommand, ScriptError, ScriptPlayer};

/// Adjust brightness and grayscale of a photo.
#[derive(Debug, Parser)]
#[command(name = "lumashift", version)]
struct Args {
    /// Source image to acquire.
    input: Option<PathBuf>,

    /// Where to write the adjusted image.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Brightness slider position.
    #[arg(short, long)]
    progress: Option<u32>,

    /// Enable the grayscale toggle.
    #[arg(short, long)]
    grayscale: bool,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON control script replayed after the input is acquired.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Also write the raw RGB565 display frame here.
    #[arg(long)]
    rgb565: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Image(#[from] ImageLoadError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), DemoError> {
    let config = DemoConfig::load(args.config.as_deref())?;
    let session = EditorSession::new(config.brightness, config.initial_state());
    let mut player = ScriptPlayer::new(session);

    let mut commands = Vec::new();
    if let Some(path) = args.input {
        commands.push(DemoCommand::LoadImage { path });
    }
    if let Some(progress) = args.progress {
        commands.push(DemoCommand::SetBrightness { progress });
    }
    if args.grayscale {
        commands.push(DemoCommand::SetGrayscale { enabled: true });
    }
    if let Some(path) = &args.script {
        commands.extend(script::load_script(path)?);
    }
    if let Some(path) = args.output {
        commands.push(DemoCommand::Export { path });
    }

    if commands.is_empty() {
        tracing::warn!("nothing to do: pass an input image or --script");
        return Ok(());
    }

    player.run(commands)?;

    let state = player.session().state();
    tracing::info!(
        "final controls: brightness {:.1}, grayscale {}",
        state.brightness,
        state.grayscale
    );

    if let Some(path) = &args.rgb565 {
        match player.displayed() {
            Some(image) => image_loader::save_rgb565(image, path)?,
            None => return Err(ScriptError::NothingToExport.into()),
        }
    }

    Ok(())
}
