use std::path::Path;

use passqr::pass::{Mode, Password, charset};
use passqr::rand::entropy_source;

use crate::export::Capabilities;
use crate::settings::Settings;
use crate::terminal::{
    BOLD, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, entropy_strength, flush, print_error, print_note, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Your choice"
}

pub fn print_help() {
    box_top("passqr");
    box_line_center("Password + QR generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without flags for the menu.");
    box_line("  2) Client: pass flags (e.g. -l 20 -n 5) to generate");
    box_line("     directly.");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password (default: 12)");
    box_opt("  -m, --mode <MODE>", "strong, mixed, letters or digits. Anything else means strong.");
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -o, --qr [FILE]", "Save the last password as a QR PNG (default: qrcode.png)");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("  -q, --quiet", "Only passwords and errors");
    box_opt("      --config <PATH>", "Settings file (env: PASSQR_CONFIG)");
    box_line("");
    box_line("MODES OF GENERATION:");
    box_line("  strong / mixed  letters, digits and symbols");
    box_line("  letters         a-z and A-Z");
    box_line("  digits          0-9");
    box_line("");
    box_line("Every selected class appears at least once when the length");
    box_line("allows it. Below that, letters come first, then digits.");
    box_bottom();
    println!();
}

pub fn print_main_menu(caps: Capabilities, quick_length: usize) {
    box_top("Password + QR Generator");
    box_line("");
    box_line("  1) Generate password");
    box_line(&format!(
        "  2) Generate example strong password ({quick_length} chars)"
    ));
    box_line("  3) Save last password as QR code (PNG)");
    box_line("  4) Copy last password to clipboard");
    box_line("  5) Exit");
    box_line("");
    box_line("  s) settings  |  h) help");
    box_bottom();

    if !caps.image_encoder {
        print_note("[Note] QR encoder is not built in. QR saving is disabled.");
    }
    if !caps.clipboard {
        print_note("[Note] Clipboard is not available. Clipboard copy disabled.");
    }
    println!();
    flush();
}

pub fn print_password(title: &str, password: &Password, mode: Mode) {
    let pool = charset::size(mode.classes());
    let bits = calculate_entropy(password.len(), pool);

    box_top(title);
    box_line("");
    box_line(&format!("  {BOLD}{}{RESET}", password.as_str()));
    box_line("");
    print_rule();
    box_line(&format!(
        "{:.1} bits ({}) | mode: {} | pool: {} chars",
        bits,
        entropy_strength(bits),
        mode,
        pool
    ));
    box_bottom();
    println!();
}

pub fn print_settings_menu(settings: &Settings, path: &Path) {
    box_top("Settings");
    box_line_center("Esc: back | CTRL+U: clear input");
    box_line("");
    box_line(&format!("{UNDERLINE}Generation{RESET}:"));
    box_line(&format!("  1) Password length: {}", settings.pass_length));
    box_line(&format!("  2) Mode: {}", settings.mode));
    box_line(&format!("  3) Quick password length: {}", settings.quick_length));
    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    box_line(&format!("  4) QR file: {}", settings.qr_file_path));
    box_line(&format!("  5) QR module size: {} px", settings.qr_module_size));
    box_line("");
    box_line(&format!("{UNDERLINE}Entropy{RESET}:"));
    box_line(&format!("     Source: {}", entropy_source()));
    box_line("");
    print_rule();
    box_line("  r) load defaults  |  s) save  |  e) back");
    box_line(&format!("  {}", path.display()));
    box_bottom();
}

pub fn print_status(status: &Status) {
    match status {
        Status::Info(msg) => println!("{msg}"),
        Status::Error(msg) => print_error(msg),
    }
    println!();
}

/// A one-line message shown under the last screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}
