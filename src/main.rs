// aocd binary.
// Prints the requested puzzle input to stdout.

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;

use aocd::cli::Cli;
use aocd::config::SESSION_ENV_VAR;
use aocd::{Config, Fetcher, PuzzleDate, Result};

fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.dir {
        Some(dir) => Config::with_root(dir),
        None => Config::from_env()?,
    };

    let session = config.resolve_session(
        cli.session.as_deref(),
        cli.user.as_deref(),
        std::env::var(SESSION_ENV_VAR).ok(),
    )?;
    let date = PuzzleDate::resolve(cli.year, cli.day, Utc::now())?;

    let mut fetcher = Fetcher::new(config.root())?;
    if let Some(interval) = cli.throttle {
        fetcher = fetcher.with_min_interval(interval);
    }

    fetcher.get_data(&session, date.year, date.day)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    match run(&cli) {
        Ok(data) => {
            print!("{}", data);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
