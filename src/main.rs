use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use pomo::cli::Cli;
use pomo::config::{Config, Paths};
use pomo::logging;
use pomo::tui::{self, CrosstermTerminal};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();
    let config = Config::load_from_path(&paths.config_file)
        .context("Failed to load configuration")?;

    let env_set = std::env::var_os(logging::LOG_ENV).is_some();
    if let Some(log_file) = logging::log_file(env_set, config.log.file.as_deref(), &paths.log_file)
    {
        logging::init(&log_file, &config.log.level);
    }
    info!(debug = cli.debug, "pomo starting");

    let mut terminal = CrosstermTerminal::new(config.display.bar_width)
        .context("Failed to initialize terminal")?;
    let outcome = tui::run(&mut terminal, cli.debug, config.timer.tick_interval());
    drop(terminal);

    outcome?;
    info!("pomo exiting");
    Ok(())
}
