//! Collaborators that take a generated password somewhere else.
//!
//! Availability is probed once at startup; front ends receive the result as
//! an [`Exporters`] value and read [`Capabilities`] from it.

mod clipboard;
#[cfg(feature = "qr")]
mod qr;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use clipboard::SystemClipboard;
#[cfg(feature = "qr")]
pub use qr::QrEncoder;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("QR creation error: {0}")]
    Encode(String),

    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Places text on the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError>;
}

/// Encodes text as a scannable image written to `path`.
pub trait ImageEncoder {
    /// Returns the path actually written. `module_size` is the pixel edge of
    /// one module.
    fn encode_to(&self, text: &str, path: &Path, module_size: u32)
    -> Result<PathBuf, ExportError>;
}

/// Which collaborators are usable in this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub image_encoder: bool,
    pub clipboard: bool,
}

/// The collaborators a front end may call. `None` means unavailable.
#[derive(Default)]
pub struct Exporters {
    pub clipboard: Option<Box<dyn ClipboardWriter>>,
    pub image: Option<Box<dyn ImageEncoder>>,
}

impl Exporters {
    /// Detect what this build and session support.
    pub fn probe() -> Self {
        let clipboard = match SystemClipboard::new() {
            Ok(c) => Some(Box::new(c) as Box<dyn ClipboardWriter>),
            Err(e) => {
                log::info!("clipboard unavailable: {e}");
                None
            }
        };

        Self {
            clipboard,
            image: image_encoder(),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            image_encoder: self.image.is_some(),
            clipboard: self.clipboard.is_some(),
        }
    }
}

#[cfg(feature = "qr")]
fn image_encoder() -> Option<Box<dyn ImageEncoder>> {
    Some(Box::new(QrEncoder))
}

#[cfg(not(feature = "qr"))]
fn image_encoder() -> Option<Box<dyn ImageEncoder>> {
    log::info!("built without the `qr` feature, QR output disabled");
    None
}

/// Create missing parent directories of `path`.
pub(crate) fn ensure_parent(path: &Path) -> Result<(), ExportError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records everything written to it.
    #[derive(Clone, Default)]
    pub struct RecordingClipboard {
        pub written: Rc<RefCell<Vec<String>>>,
        pub fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
            if self.fail {
                return Err(ExportError::Clipboard("no display".into()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    /// Records encode requests instead of rendering.
    #[derive(Clone, Default)]
    pub struct RecordingEncoder {
        pub encoded: Rc<RefCell<Vec<(String, PathBuf, u32)>>>,
    }

    impl ImageEncoder for RecordingEncoder {
        fn encode_to(
            &self,
            text: &str,
            path: &Path,
            module_size: u32,
        ) -> Result<PathBuf, ExportError> {
            self.encoded
                .borrow_mut()
                .push((text.to_string(), path.to_path_buf(), module_size));
            Ok(path.to_path_buf())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;

    #[test]
    fn capabilities_follow_present_collaborators() {
        assert_eq!(Exporters::default().capabilities(), Capabilities::default());

        let exporters = Exporters {
            clipboard: Some(Box::new(RecordingClipboard::default())),
            image: None,
        };
        assert_eq!(
            exporters.capabilities(),
            Capabilities {
                image_encoder: false,
                clipboard: true
            }
        );
    }

    #[test]
    fn ensure_parent_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("code.png");
        ensure_parent(&path).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        ensure_parent(Path::new("code.png")).unwrap();
    }
}
