//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind the interactive session (loading, filtering, statistics, paging).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::menu::MenuChoice;
use cli::parser::Cli;
use cli::session::{Flow, Session};
use config::Config;
use crate::core::pager::PagerState;
use errors::AppResult;
use models::Dataset;
use std::io::{self, BufRead, Write};
use ui::prompt::Console;

/// Central menu dispatcher
pub fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    console: &mut Console<R, W>,
    dataset: &Dataset,
    pager: &mut PagerState,
    cfg: &Config,
) -> AppResult<Flow> {
    match choice {
        MenuChoice::TimeStats => cli::commands::time_stats::handle(dataset, console.out())?,
        MenuChoice::StationStats => cli::commands::station_stats::handle(dataset, console.out())?,
        MenuChoice::TripDurationStats => {
            cli::commands::trip_duration::handle(dataset, console.out())?
        }
        MenuChoice::UserStats => cli::commands::user_stats::handle(dataset, console.out())?,
        MenuChoice::RawData => {
            cli::commands::raw_data::handle(console, dataset, pager, cfg.page_size)?;
        }
        MenuChoice::Restart => return Ok(Flow::Restart),
        MenuChoice::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load(cli.config.as_deref())?;

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if cli.max_attempts.is_some() {
        cfg.max_attempts = cli.max_attempts;
    }
    if let Some(level) = &cli.log_level {
        cfg.log_level = level.clone();
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, with overrides
    let cfg = resolve_config(&cli)?;

    // 3️⃣ logging on stderr
    logging::setup_logging(&cfg.log_level);
    tracing::info!("bikeshare v{} starting", env!("CARGO_PKG_VERSION"));

    // 4️⃣ interactive session on stdin/stdout
    let console =
        Console::new(io::stdin().lock(), io::stdout().lock()).with_max_attempts(cfg.max_attempts);
    Session::new(console, cfg).run()
}
