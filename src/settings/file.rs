//! Settings file persistence.

use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::{Settings, SettingsError};

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let mut data = serde_json::to_string_pretty(settings)?;
    data.push('\n');
    file.write_all(data.as_bytes())?;
    Ok(())
}

/// Read settings, creating the file with defaults when it is missing or empty.
/// A malformed file is replaced by defaults.
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let mut data = String::new();
    match fs::File::open(path) {
        Ok(mut file) => {
            file.read_to_string(&mut data)?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    if data.trim().is_empty() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    match serde_json::from_str(&data) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            log::warn!("{} is malformed ({e}), restoring defaults", path.display());
            let settings = Settings::default();
            save(&settings, path)?;
            Ok(settings)
        }
    }
}

#[inline]
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("passqr")
        .join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = load(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn saved_values_are_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            pass_length: 30,
            mode: "Digits".into(),
            ..Settings::default()
        };
        save(&settings, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.pass_length, 30);
        assert_eq!(loaded.mode(), passqr::pass::Mode::Digits);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "qr_file_path": "out/code.png" }"#).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.qr_file_path, "out/code.png");
        assert_eq!(loaded.pass_length, 12);
        assert_eq!(loaded.quick_length, 16);
    }

    #[test]
    fn malformed_file_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "74,19,false,false").unwrap();

        assert_eq!(load(&path).unwrap(), Settings::default());
        let rewritten = fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("\"pass_length\": 12"));
    }
}
