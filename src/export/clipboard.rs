use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{ClipboardWriter, ExportError};

/// The desktop clipboard through copypasta.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ExportError> {
        ClipboardContext::new()
            .map(|ctx| Self { ctx })
            .map_err(|e| ExportError::Clipboard(e.to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ExportError::Clipboard(e.to_string()))?;

        // Some backends hand the contents back through a read; drop our copy.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
