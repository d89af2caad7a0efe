//! Persisted front-end defaults.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use passqr::pass::Mode;

pub use file::default_path;

/// Largest accepted QR module edge, in pixels.
pub const MAX_QR_MODULE_SIZE: u32 = 64;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pass_length: usize,
    /// Stored as typed by the user; parsed with the usual fallback on use.
    pub mode: String,
    pub quick_length: usize,
    pub qr_file_path: String,
    pub qr_module_size: u32,
}

impl Settings {
    pub fn mode(&self) -> Mode {
        Mode::parse(&self.mode)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    /// Settings from `path` (or the default location), falling back to
    /// defaults when the file can't be read.
    pub fn load_or_default(path: Option<&Path>) -> (Self, PathBuf) {
        let path = path.map(Path::to_path_buf).unwrap_or_else(default_path);
        let settings = Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("failed to load settings from {}: {e}", path.display());
            Self::default()
        });
        (settings, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            mode: Mode::Strong.to_string(),
            quick_length: 16,
            qr_file_path: String::from("qrcode.png"),
            qr_module_size: 10,
        }
    }
}
