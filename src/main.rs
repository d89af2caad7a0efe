use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod export;
mod settings;
mod terminal;
mod tui;

use cli::Args;
use export::Exporters;
use settings::Settings;

fn init_logging(quiet: bool) {
    let env = env_logger::Env::default().filter_or("PASSQR_LOG", "warn");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp_secs().format_target(false);
    if quiet {
        builder.filter_level(log::LevelFilter::Off);
    }
    builder.init();
}

fn main() -> ExitCode {
    terminal::reset_terminal();
    exits::install_handlers();
    exits::harden_process();

    let args = Args::parse();
    init_logging(args.quiet);
    log::debug!("{args:?}");

    let (settings, settings_path) = Settings::load_or_default(args.config.as_deref());
    let exporters = Exporters::probe();
    log::debug!(
        "capabilities: {:?}, entropy: {}",
        exporters.capabilities(),
        passqr::rand::entropy_source()
    );

    if args.has_explicit_args() {
        cli::run(args, settings, exporters)
    } else {
        tui::run(settings, settings_path, exporters)
    }
}
