//! Warning, error and confirmation messages for client mode.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::{RED, RESET, YELLOW};

/// Suppresses warnings and confirmations, never errors or passwords.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stdin is a tty.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Warning on stderr (yellow). Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error on stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        if count == 1 {
            println!("Password copied to clipboard.");
        } else {
            println!("{count} passwords copied to clipboard.");
        }
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Quiet or non-interactive sessions fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet() || !is_interactive() {
        warn("Clipboard unavailable. Printing to terminal instead.");
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => true,
        _ => {
            eprintln!("Aborted.");
            false
        }
    }
}

pub fn qr_saved(path: &str) {
    if !quiet() {
        println!("QR code saved as '{path}'.");
    }
}
