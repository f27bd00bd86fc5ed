// aocd library.
// Fetches Advent of Code puzzle inputs and caches them per session token.

pub mod aoc;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod puzzle;

use chrono::Utc;

pub use config::Config;
pub use error::{AocdError, Result};
pub use fetcher::Fetcher;
pub use puzzle::PuzzleDate;

/// Get puzzle input using the environment for anything not given.
///
/// The token comes from `AOC_SESSION` or the token file, the cache root from
/// `AOCD_DIR` or `~/.config/aocd`, and a missing year or day from today's date.
pub fn get_data(session: Option<&str>, year: Option<i32>, day: Option<u32>) -> Result<String> {
    let config = Config::from_env()?;
    let session =
        config.resolve_session(session, None, std::env::var(config::SESSION_ENV_VAR).ok())?;
    let date = PuzzleDate::resolve(year, day, Utc::now())?;

    let mut fetcher = Fetcher::new(config.root())?;
    fetcher.get_data(&session, date.year, date.day)
}
