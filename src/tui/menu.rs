use std::path::{Path, PathBuf};

use passqr::pass::{self, Mode, Password};

use super::input::{Input, Prompter};
use super::text::Status;
use crate::export::{Capabilities, Exporters};
use crate::settings::{MAX_QR_MODULE_SIZE, Settings};

/// What the main loop should do after a menu choice.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A new password is in [`Session::last`].
    Generated(String),
    Status(Status),
    Help,
    Settings,
    /// Prompt cancelled; just redraw.
    Redraw,
    Quit,
}

pub struct Generated {
    pub password: Password,
    pub mode: Mode,
}

/// Menu state: defaults, collaborators, and the last generated password.
pub struct Session {
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub caps: Capabilities,
    exporters: Exporters,
    last: Option<Generated>,
}

fn error(msg: impl Into<String>) -> Outcome {
    Outcome::Status(Status::Error(msg.into()))
}

fn info(msg: impl Into<String>) -> Outcome {
    Outcome::Status(Status::Info(msg.into()))
}

impl Session {
    pub fn new(settings: Settings, settings_path: PathBuf, exporters: Exporters) -> Self {
        Self {
            settings,
            settings_path,
            caps: exporters.capabilities(),
            exporters,
            last: None,
        }
    }

    pub fn last(&self) -> Option<&Generated> {
        self.last.as_ref()
    }

    pub fn handle<P: Prompter + ?Sized>(&mut self, choice: &str, prompter: &mut P) -> Outcome {
        match choice.trim() {
            "1" => self.generate_custom(prompter),
            "2" => self.generate(self.settings.quick_length, Mode::Strong).map_or_else(
                |e| e,
                |len| Outcome::Generated(format!("Example Strong Password ({len} chars)")),
            ),
            "3" => self.save_qr(prompter),
            "4" => self.copy_last(),
            "5" | "q" | "quit" | "exit" => Outcome::Quit,
            "s" => Outcome::Settings,
            "h" | "help" => Outcome::Help,
            _ => error("Invalid choice. Please try again."),
        }
    }

    fn generate(&mut self, length: usize, mode: Mode) -> Result<usize, Outcome> {
        match pass::generate(length, mode) {
            Ok(password) => {
                self.last = Some(Generated { password, mode });
                Ok(length)
            }
            Err(e) => Err(error(format!("Error: {e}"))),
        }
    }

    fn generate_custom<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Outcome {
        let initial = self.settings.pass_length.to_string();
        let length = match prompter.ask("Password length", &initial) {
            Input::Line(text) => match pass::parse_length(&text) {
                Ok(length) => length,
                Err(e) => return error(e.to_string()),
            },
            Input::Cancelled => return Outcome::Redraw,
            Input::Closed => return Outcome::Quit,
        };

        let modes = Mode::NAMES.join(" / ");
        let mode = match prompter.ask(&format!("Mode ({modes})"), &self.settings.mode) {
            Input::Line(text) if text.trim().is_empty() => self.settings.mode(),
            Input::Line(text) => Mode::parse(text.trim()),
            Input::Cancelled => return Outcome::Redraw,
            Input::Closed => return Outcome::Quit,
        };

        match self.generate(length, mode) {
            Ok(_) => Outcome::Generated("Generated Password".into()),
            Err(outcome) => outcome,
        }
    }

    fn save_qr<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Outcome {
        let Some(encoder) = self.exporters.image.as_ref().filter(|_| self.caps.image_encoder)
        else {
            return error("QR saving is unavailable. Rebuild with `--features qr`.");
        };
        let Some(last) = self.last.as_ref() else {
            return error("Generate a password first (option 1 or 2).");
        };

        let default = &self.settings.qr_file_path;
        let name = match prompter.ask("Save file name", default) {
            Input::Line(text) if text.trim().is_empty() => default.clone(),
            Input::Line(text) => text.trim().to_string(),
            Input::Cancelled => return Outcome::Redraw,
            Input::Closed => return Outcome::Quit,
        };

        match encoder.encode_to(
            last.password.as_str(),
            Path::new(&name),
            self.settings.qr_module_size,
        ) {
            Ok(path) => info(format!("QR code saved as '{}'.", path.display())),
            Err(e) => error(e.to_string()),
        }
    }

    fn copy_last(&mut self) -> Outcome {
        let Some(clipboard) = self.exporters.clipboard.as_mut().filter(|_| self.caps.clipboard)
        else {
            return error("Clipboard copy unavailable.");
        };
        let Some(last) = self.last.as_ref() else {
            return error("Generate a password first.");
        };

        match clipboard.write_text(last.password.as_str()) {
            Ok(()) => info("Password copied to clipboard."),
            Err(e) => error(e.to_string()),
        }
    }

    /// One settings-menu choice. `None` leaves the settings menu.
    pub fn edit_setting<P: Prompter + ?Sized>(
        &mut self,
        choice: &str,
        prompter: &mut P,
    ) -> Option<Status> {
        let settings = &mut self.settings;
        match choice.trim() {
            "1" | "3" => {
                let quick = choice.trim() == "3";
                let (prompt, current) = if quick {
                    ("Quick password length", settings.quick_length)
                } else {
                    ("Password length", settings.pass_length)
                };
                let Input::Line(text) = prompter.ask(prompt, &current.to_string()) else {
                    return Some(Status::Info(String::new()));
                };
                match pass::parse_length(&text) {
                    Ok(length) if quick => settings.quick_length = length,
                    Ok(length) => settings.pass_length = length,
                    Err(e) => return Some(Status::Error(e.to_string())),
                }
            }
            "2" => {
                let modes = Mode::NAMES.join(" / ");
                if let Input::Line(text) = prompter.ask(&format!("Mode ({modes})"), &settings.mode)
                {
                    settings.mode = Mode::parse(text.trim()).to_string();
                }
            }
            "4" => {
                if let Input::Line(text) = prompter.ask("QR file", &settings.qr_file_path)
                    && !text.trim().is_empty()
                {
                    settings.qr_file_path = text.trim().to_string();
                }
            }
            "5" => {
                let current = settings.qr_module_size.to_string();
                let Input::Line(text) = prompter.ask("QR module size (px)", &current) else {
                    return Some(Status::Info(String::new()));
                };
                match text.trim().parse::<u32>() {
                    Ok(size @ 1..=MAX_QR_MODULE_SIZE) => settings.qr_module_size = size,
                    _ => {
                        return Some(Status::Error(format!(
                            "Module size must be between 1 and {MAX_QR_MODULE_SIZE}."
                        )));
                    }
                }
            }
            "r" => *settings = Settings::default(),
            "s" => {
                return Some(match settings.save_to(&self.settings_path) {
                    Ok(()) => Status::Info(format!("Saved to {}", self.settings_path.display())),
                    Err(e) => Status::Error(format!("Error saving settings: {e}")),
                });
            }
            "" | "e" => return None,
            _ => return Some(Status::Error("Invalid input, please enter a valid menu option...".into())),
        }
        Some(Status::Info(String::new()))
    }
}
