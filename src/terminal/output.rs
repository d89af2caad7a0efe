//! Terminal output: ANSI styles, boxed panels, entropy estimates.

use std::fmt;
use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";
pub const BOLD: &str = "\x1b[1m";

/// Clear screen and scrollback, cursor home.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_note(msg: &str) {
    println!("{YELLOW}{msg}{RESET}");
}

// Panels are BOX_WIDTH columns including the borders.
pub const BOX_WIDTH: usize = 60;
const INNER: usize = BOX_WIDTH - 4;
const HELP_FLAG_COL: usize = 24;

fn edge(left: char, label: &str, right: char) {
    let rule = "─".repeat((BOX_WIDTH - 2).saturating_sub(label.chars().count()));
    println!("{left}{label}{rule}{right}");
}

enum Align {
    Left,
    Center,
}

fn row(content: &str, align: Align) {
    let slack = INNER.saturating_sub(console_width(content));
    let (before, after) = match align {
        Align::Left => (0, slack),
        Align::Center => (slack / 2, slack - slack / 2),
    };
    println!("│ {}{content}{} │", " ".repeat(before), " ".repeat(after));
}

/// ┌─ Title ─────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        edge('┌', "", '┐');
    } else {
        edge('┌', &format!("─ {title} "), '┐');
    }
}

pub fn box_line(content: &str) {
    row(content, Align::Left);
}

pub fn box_line_center(content: &str) {
    row(content, Align::Center);
}

/// ├─────────────┤
pub fn print_rule() {
    edge('├', "", '┤');
}

pub fn box_bottom() {
    edge('└', "", '┘');
}

/// Help entry: flag in a fixed column, description word-wrapped beside it.
pub fn box_opt(flag: &str, desc: &str) {
    let width = INNER - HELP_FLAG_COL;
    let mut lines = wrap(desc, width).into_iter();

    let first = lines.next().unwrap_or_default();
    row(&format!("{flag:<w$}{first}", w = HELP_FLAG_COL), Align::Left);
    for line in lines {
        row(&format!("{:w$}{line}", "", w = HELP_FLAG_COL), Align::Left);
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if in_escape => {}
            _ => width += 1,
        }
    }
    width
}

/// Entropy in bits of `length` characters drawn uniformly from `pool_size`.
pub fn calculate_entropy(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        })
    }
}

pub fn entropy_strength(bits: f64) -> Strength {
    match bits {
        b if b < 36.0 => Strength::Weak,
        b if b < 60.0 => Strength::Fair,
        b if b < 128.0 => Strength::Strong,
        _ => Strength::VeryStrong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_codes_take_no_width() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{UNDERLINE}Mode{RESET}:")), 5);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("one two three", 7), ["one two", "three"]);
        assert_eq!(wrap("", 7), Vec::<String>::new());
        assert_eq!(wrap("overlong-word x", 4), ["overlong-word", "x"]);
    }

    #[test]
    fn entropy_of_strong_twelve() {
        let bits = calculate_entropy(12, 94);
        assert!((bits - 78.65).abs() < 0.01, "{bits}");
        assert_eq!(entropy_strength(bits), Strength::Strong);
        assert_eq!(entropy_strength(calculate_entropy(4, 10)), Strength::Weak);
        assert_eq!(entropy_strength(calculate_entropy(20, 94)), Strength::VeryStrong);
        assert_eq!(calculate_entropy(12, 0), 0.0);
    }
}
