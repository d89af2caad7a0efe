//! Client mode: generate from flags without the menu.

mod context;
pub mod prompts;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

pub use context::{Context, Failure};

use crate::export::Exporters;
use crate::settings::Settings;

/// Most passwords one `-n` run will generate.
pub const MAX_COUNT: u32 = 1000;

#[derive(Parser, Debug, Default)]
#[command(
    version,
    about = "Password generator with guaranteed character-class coverage",
    long_about = "Runs an interactive menu when started without generation flags. \
                  With any of -l, -m, -n, -b, -o, -s or -q it generates directly."
)]
pub struct Args {
    /// Characters per password (default: 12)
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// strong, mixed, letters or digits; anything else means strong
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// How many passwords to generate (at most 1000)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=MAX_COUNT as i64))]
    pub number: Option<u32>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Save the last password as a QR code PNG (default: qrcode.png)
    #[arg(short = 'o', long = "qr", value_name = "FILE", num_args = 0..=1)]
    pub qr: Option<Option<PathBuf>>,

    /// Start from saved settings instead of built-in defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Suppress everything except passwords and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Settings file location
    #[arg(long, value_name = "PATH", env = "PASSQR_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Any flag that asks for direct generation rather than the menu.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.mode.is_some()
            || self.number.is_some()
            || self.clipboard
            || self.qr.is_some()
            || self.saved
            || self.quiet
    }
}

/// Run client mode, reporting failures on stderr. `saved` is only used with
/// `-s`; otherwise built-in defaults apply.
pub fn run(args: Args, saved: Settings, exporters: Exporters) -> ExitCode {
    prompts::set_quiet(args.quiet);

    let mut ctx = Context::new(args, saved, exporters);
    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            prompts::error(&failure.to_string());
            ExitCode::from(failure.exit_status())
        }
    }
}
