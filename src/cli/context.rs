//! CLI context: bundles settings, flags and collaborators.

use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use zeroize::Zeroize;

use passqr::pass::{self, Mode, PassError, Password};

use super::{Args, prompts};
use crate::export::{ExportError, Exporters};
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum Failure {
    #[error(transparent)]
    Pass(#[from] PassError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("QR saving is unavailable. Rebuild with `--features qr`.")]
    QrUnavailable,

    #[error("could not write passwords: {0}")]
    Output(#[from] io::Error),
}

impl Failure {
    /// 2 for bad user input, 1 for everything else.
    pub fn exit_status(&self) -> u8 {
        match self {
            Failure::Pass(
                PassError::InvalidLength(_) | PassError::NotANumber(_) | PassError::TooLong { .. },
            ) => 2,
            _ => 1,
        }
    }
}

/// Application context for client mode.
pub struct Context {
    settings: Settings,
    args: Args,
    exporters: Exporters,
}

impl Context {
    pub fn new(args: Args, saved: Settings, exporters: Exporters) -> Self {
        let settings = if args.saved { saved } else { Settings::default() };

        Self {
            settings,
            args,
            exporters,
        }
    }

    /// Generate and deliver passwords, printing to stdout.
    pub fn run(&mut self) -> Result<(), Failure> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    pub fn run_to<W: Write>(&mut self, out: &mut W) -> Result<(), Failure> {
        let length = self.length()?;
        let mode = self.mode();
        let count = self.args.number.unwrap_or(1) as usize;

        let qr_path = self.qr_path();
        if qr_path.is_some() && self.exporters.image.is_none() {
            return Err(Failure::QrUnavailable);
        }

        let to_clipboard = if self.args.clipboard && self.exporters.clipboard.is_none() {
            if !prompts::clipboard_fallback_prompt() {
                return Ok(());
            }
            false
        } else {
            self.args.clipboard
        };

        let passwords = (0..count)
            .map(|_| pass::generate(length, mode))
            .collect::<Result<Vec<Password>, _>>()?;
        log::info!("generated {count} password(s), length {length}, mode {mode}");

        if to_clipboard {
            self.copy(&passwords)?;
        } else {
            for password in &passwords {
                out.write_all(password.as_str().as_bytes())?;
                out.write_all(b"\n")?;
            }
            out.flush()?;
        }

        if let (Some(path), Some(last)) = (qr_path, passwords.last())
            && let Some(encoder) = self.exporters.image.as_ref()
        {
            let written = encoder.encode_to(last.as_str(), &path, self.settings.qr_module_size)?;
            prompts::qr_saved(&written.display().to_string());
        }

        Ok(())
    }

    fn length(&self) -> Result<usize, PassError> {
        match self.args.length.as_deref() {
            Some(text) => pass::parse_length(text),
            None => Ok(self.settings.pass_length),
        }
    }

    fn mode(&self) -> Mode {
        match self.args.mode.as_deref() {
            Some(text) => Mode::parse(text.trim()),
            None => self.settings.mode(),
        }
    }

    fn qr_path(&self) -> Option<PathBuf> {
        self.args.qr.as_ref().map(|path| {
            path.clone()
                .unwrap_or_else(|| PathBuf::from(&self.settings.qr_file_path))
        })
    }

    fn copy(&mut self, passwords: &[Password]) -> Result<(), ExportError> {
        let Some(clipboard) = self.exporters.clipboard.as_mut() else {
            return Ok(());
        };

        let mut joined = passwords
            .iter()
            .map(Password::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        let result = clipboard.write_text(&joined);
        joined.zeroize();

        result?;
        prompts::clipboard_copied(passwords.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fakes::{RecordingClipboard, RecordingEncoder};
    use passqr::pass::CharacterClass;

    fn context(args: Args, exporters: Exporters) -> Context {
        prompts::set_quiet(true);
        Context::new(args, Settings::default(), exporters)
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn prints_requested_passwords() {
        let args = Args {
            length: Some("20".into()),
            mode: Some("DIGITS".into()),
            number: Some(3),
            ..Args::default()
        };
        let mut out = Vec::new();
        context(args, Exporters::default()).run_to(&mut out).unwrap();

        let printed = lines(&out);
        assert_eq!(printed.len(), 3);
        for line in printed {
            assert_eq!(line.len(), 20);
            assert!(line.chars().all(|c| CharacterClass::Digits.contains(c)));
        }
    }

    #[test]
    fn defaults_to_one_strong_twelve() {
        let mut out = Vec::new();
        context(Args::default(), Exporters::default())
            .run_to(&mut out)
            .unwrap();

        let printed = lines(&out);
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].len(), 12);
        for class in CharacterClass::ALL {
            assert!(printed[0].chars().any(|c| class.contains(c)));
        }
    }

    #[test]
    fn invalid_length_exits_with_usage_code() {
        for bad in ["0", "-4", "abc", "9223372036854775807"] {
            let args = Args {
                length: Some(bad.into()),
                ..Args::default()
            };
            let mut out = Vec::new();
            let err = context(args, Exporters::default())
                .run_to(&mut out)
                .unwrap_err();
            assert!(matches!(err, Failure::Pass(_)), "{bad}: {err}");
            assert_eq!(err.exit_status(), 2);
            assert!(out.is_empty());
        }
    }

    #[test]
    fn clipboard_receives_all_passwords() {
        let clipboard = RecordingClipboard::default();
        let exporters = Exporters {
            clipboard: Some(Box::new(clipboard.clone())),
            image: None,
        };
        let args = Args {
            number: Some(2),
            clipboard: true,
            ..Args::default()
        };
        let mut out = Vec::new();
        context(args, exporters).run_to(&mut out).unwrap();

        assert!(out.is_empty());
        let written = clipboard.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].lines().count(), 2);
    }

    #[test]
    fn clipboard_failure_is_reported() {
        let exporters = Exporters {
            clipboard: Some(Box::new(RecordingClipboard {
                fail: true,
                ..Default::default()
            })),
            image: None,
        };
        let args = Args {
            clipboard: true,
            ..Args::default()
        };
        let err = context(args, exporters).run_to(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Failure::Export(ExportError::Clipboard(_))));
        assert_eq!(err.exit_status(), 1);
    }

    #[test]
    fn qr_encodes_last_password() {
        let encoder = RecordingEncoder::default();
        let exporters = Exporters {
            clipboard: None,
            image: Some(Box::new(encoder.clone())),
        };
        let args = Args {
            number: Some(2),
            qr: Some(None),
            ..Args::default()
        };
        let mut out = Vec::new();
        context(args, exporters).run_to(&mut out).unwrap();

        let printed = lines(&out);
        let encoded = encoder.encoded.borrow();
        assert_eq!(encoded.len(), 1);
        assert_eq!(encoded[0].0, printed[1]);
        assert_eq!(encoded[0].1, PathBuf::from("qrcode.png"));
        assert_eq!(encoded[0].2, Settings::default().qr_module_size);
    }

    #[test]
    fn qr_without_encoder_fails_before_generating() {
        let args = Args {
            qr: Some(Some(PathBuf::from("x.png"))),
            ..Args::default()
        };
        let mut out = Vec::new();
        let err = context(args, Exporters::default())
            .run_to(&mut out)
            .unwrap_err();
        assert!(matches!(err, Failure::QrUnavailable));
        assert!(out.is_empty());
    }

    #[test]
    fn saved_settings_apply_only_with_flag() {
        prompts::set_quiet(true);
        let saved = Settings {
            pass_length: 5,
            mode: "letters".into(),
            ..Settings::default()
        };

        let args = Args {
            saved: true,
            ..Args::default()
        };
        let mut out = Vec::new();
        Context::new(args, saved.clone(), Exporters::default())
            .run_to(&mut out)
            .unwrap();
        let printed = lines(&out);
        assert_eq!(printed[0].len(), 5);
        assert!(printed[0].chars().all(|c| CharacterClass::Letters.contains(c)));

        let args = Args {
            number: Some(1),
            ..Args::default()
        };
        let mut out = Vec::new();
        Context::new(args, saved, Exporters::default())
            .run_to(&mut out)
            .unwrap();
        assert_eq!(lines(&out)[0].len(), 12);
    }
}
