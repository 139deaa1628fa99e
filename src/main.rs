use std::io;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use breathe::cli::commands;
use breathe::error::BreatheError;
use breathe::features::playback::Player;
use breathe::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), BreatheError> {
    let _cli = Cli::parse();
    let config = commands::load_config();
    let mut player = Player::new(commands::resolve_style(&config.display));

    let stdin = io::stdin();
    let stdout = io::stdout();
    commands::session(&mut stdin.lock(), &mut stdout.lock(), &mut player)?;
    Ok(())
}
