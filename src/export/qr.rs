//! QR code PNG output.

use std::path::{Path, PathBuf};

use image::Luma;
use qrcode::{EcLevel, QrCode};

use super::{ExportError, ImageEncoder, ensure_parent};

/// Black-on-white PNG, error correction level M, 4-module quiet zone.
pub struct QrEncoder;

impl ImageEncoder for QrEncoder {
    fn encode_to(
        &self,
        text: &str,
        path: &Path,
        module_size: u32,
    ) -> Result<PathBuf, ExportError> {
        let module_size = module_size.max(1);
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)
            .map_err(|e| ExportError::Encode(e.to_string()))?;

        let img = code
            .render::<Luma<u8>>()
            .module_dimensions(module_size, module_size)
            .quiet_zone(true)
            .build();

        ensure_parent(path)?;
        img.save(path).map_err(|e| ExportError::Encode(e.to_string()))?;
        log::debug!("wrote QR code to {}", path.display());
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("qrcode.png");

        let written = QrEncoder.encode_to("Zx9!kq#2LmP0", &path, 10).unwrap();
        assert_eq!(written, path);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
