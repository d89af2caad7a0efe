//! Interactive TUI menus.

mod input;
mod menu;
mod text;

use std::path::PathBuf;
use std::process::ExitCode;

use crate::export::Exporters;
use crate::settings::Settings;
use crate::terminal::clear;

use input::{Input, Prompter, TerminalPrompter};
use menu::{Outcome, Session};
use text::*;

/// Run TUI interactive mode until the user quits or input closes.
pub fn run(settings: Settings, settings_path: PathBuf, exporters: Exporters) -> ExitCode {
    let mut session = Session::new(settings, settings_path, exporters);
    let mut prompter = TerminalPrompter;

    clear();
    loop {
        print_main_menu(session.caps, session.settings.quick_length);

        let choice = match prompter.ask(enter_prompt(), "") {
            Input::Line(choice) => choice,
            Input::Cancelled => {
                clear();
                continue;
            }
            Input::Closed => break,
        };

        let outcome = session.handle(&choice, &mut prompter);
        clear();
        match outcome {
            Outcome::Generated(title) => {
                if let Some(last) = session.last() {
                    print_password(&title, &last.password, last.mode);
                }
            }
            Outcome::Status(status) => print_status(&status),
            Outcome::Help => print_help(),
            Outcome::Settings => {
                settings_menu(&mut session, &mut prompter);
                clear();
            }
            Outcome::Redraw => {}
            Outcome::Quit => break,
        }
    }

    println!("Exiting. Stay safe!");
    ExitCode::SUCCESS
}

fn settings_menu<P: Prompter>(session: &mut Session, prompter: &mut P) {
    clear();
    loop {
        print_settings_menu(&session.settings, &session.settings_path);

        let choice = match prompter.ask(enter_prompt(), "") {
            Input::Line(choice) => choice,
            Input::Cancelled | Input::Closed => return,
        };

        clear();
        match session.edit_setting(&choice, prompter) {
            Some(status) => print_status(&status),
            None => return,
        }
    }
}
