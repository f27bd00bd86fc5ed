// Command-line interface parsing.
// Positional day and year select the puzzle; flags pick the token, cache root and verbosity.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

/// Fetch Advent of Code puzzle inputs, cached per session token
#[derive(Parser, Debug)]
#[command(name = "aocd")]
#[command(about = "Fetch Advent of Code puzzle inputs")]
#[command(version)]
pub struct Cli {
    /// Puzzle day (1-25). Defaults to today during December
    pub day: Option<u32>,

    /// Event year. Defaults to the most recent event
    pub year: Option<i32>,

    /// Session token (overrides AOC_SESSION and the token file)
    #[arg(short, long, value_name = "TOKEN")]
    pub session: Option<String>,

    /// Use the named token from tokens.json
    #[arg(short, long, value_name = "NAME", conflicts_with = "session")]
    pub user: Option<String>,

    /// Config and cache root (overrides AOCD_DIR)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Minimum seconds between network requests
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub throttle: Option<Duration>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default env_logger filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Parses a non-negative number of seconds, fractions allowed.
pub fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("'{}' is not a usable number of seconds", s))
}
