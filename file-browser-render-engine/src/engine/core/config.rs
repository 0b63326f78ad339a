use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use clap::Parser;
use serde::Deserialize;

use constants::layout::{GRID_STEP, MAX_TEXT_PREVIEW_BYTES, TEXT_PREVIEW_BYTES};

use crate::engine::scene::ScanSettings;
use crate::error::ConfigError;

/// Browse a directory as a 3D scene.
#[derive(Parser, Debug)]
#[command(name = "file-browser", version)]
pub struct Args {
    /// Directory to browse.
    pub root: PathBuf,

    /// JSON settings file; command line options take precedence over it.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Distance between grid cells.
    #[arg(long)]
    pub grid_step: Option<f32>,

    /// Bytes read from each text file for its preview (at most 65536).
    #[arg(long)]
    pub text_preview_bytes: Option<usize>,

    /// Hide files whose name starts with a dot (hidden directories are
    /// always hidden).
    #[arg(long)]
    pub hide_dotfiles: bool,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    #[serde(skip)]
    pub root: PathBuf,
    pub grid_step: f32,
    pub text_preview_bytes: usize,
    pub hide_dotfiles: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            grid_step: GRID_STEP,
            text_preview_bytes: TEXT_PREVIEW_BYTES,
            hide_dotfiles: false,
        }
    }
}

impl BrowserSettings {
    /// Defaults, overridden by the settings file, overridden by the command
    /// line.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut settings = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(step) = args.grid_step {
            settings.grid_step = step;
        }
        if let Some(bytes) = args.text_preview_bytes {
            settings.text_preview_bytes = bytes;
        }
        settings.hide_dotfiles |= args.hide_dotfiles;

        if !(settings.grid_step.is_finite() && settings.grid_step > 0.0) {
            return Err(ConfigError::InvalidGridStep(settings.grid_step));
        }
        if !(1..=MAX_TEXT_PREVIEW_BYTES).contains(&settings.text_preview_bytes) {
            return Err(ConfigError::InvalidTextPreviewBytes {
                got: settings.text_preview_bytes,
                max: MAX_TEXT_PREVIEW_BYTES,
            });
        }
        if !args.root.is_dir() {
            return Err(ConfigError::NotADirectory(args.root.clone()));
        }
        settings.root = args.root.clone();

        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            grid_step: self.grid_step,
            text_preview_bytes: self.text_preview_bytes,
            hide_dotfiles: self.hide_dotfiles,
        }
    }
}
