use std::io::{self, BufRead};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush};

/// One answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Esc or Ctrl+Q.
    Cancelled,
    /// Ctrl+C, Ctrl+D or end of stdin.
    Closed,
}

/// Source of answers for the menu.
pub trait Prompter {
    fn ask(&mut self, prompt: &str, initial: &str) -> Input;
}

/// Raw-mode line editing on the terminal, or plain buffered lines when raw
/// mode isn't available (pipes, dumb terminals).
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str, initial: &str) -> Input {
        match RawModeGuard::new() {
            Ok(guard) => get_editable_input(prompt, initial, guard),
            Err(_) => get_buffered_input(prompt, initial),
        }
    }
}

fn get_buffered_input(prompt: &str, initial: &str) -> Input {
    if initial.is_empty() {
        print!("{prompt}: ");
    } else {
        print!("{prompt} [{initial}]: ");
    }
    flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => Input::Closed,
        Ok(_) => {
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                Input::Line(initial.to_string())
            } else {
                Input::Line(line.to_string())
            }
        }
    }
}

fn get_editable_input(prompt: &str, initial: &str, guard: RawModeGuard) -> Input {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len();
    let mut drawn_len = input.len();

    print!("{}: {}", prompt, initial);
    flush();

    let result = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => break Input::Closed,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') if ctrl => break Input::Closed,
            KeyCode::Char('q') if ctrl => break Input::Cancelled,
            KeyCode::Esc => break Input::Cancelled,
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => break Input::Line(input.iter().collect()),
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        // Redraw the line, then park the cursor
        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
        print!("\r{}: {}", prompt, text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn_len = input.len();
    };

    drop(guard);
    println!();
    result
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::{Input, Prompter};

    /// Answers prompts from a queue; closes once it runs dry.
    pub struct ScriptedPrompter {
        answers: VecDeque<Input>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[&str]) -> Self {
            Self::from_inputs(answers.iter().map(|a| Input::Line(a.to_string())))
        }

        pub fn from_inputs(answers: impl IntoIterator<Item = Input>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, prompt: &str, _initial: &str) -> Input {
            self.asked.push(prompt.to_string());
            self.answers.pop_front().unwrap_or(Input::Closed)
        }
    }
}
