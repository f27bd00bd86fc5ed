// Cache path utilities.
// Constructs filesystem paths for the token/year/day cache hierarchy.

use std::path::{Path, PathBuf};

use crate::error::{AocdError, Result};

/// Path to a session token's directory.
fn token_dir(root: &Path, session: &str) -> Result<PathBuf> {
    check_token(session)?;
    Ok(root.join(session))
}

/// Path to a year's directory under a token.
fn year_dir(root: &Path, session: &str, year: i32) -> Result<PathBuf> {
    token_dir(root, session).map(|dir| dir.join(year.to_string()))
}

/// Path to a day's cached puzzle input.
pub fn input_path(root: &Path, session: &str, year: i32, day: u32) -> Result<PathBuf> {
    year_dir(root, session, year).map(|dir| dir.join(format!("{}.txt", day)))
}

/// Tokens become directory names verbatim, so anything that could escape the
/// root or fold two tokens into one directory is rejected rather than rewritten.
fn check_token(session: &str) -> Result<()> {
    let valid = !session.is_empty()
        && session
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(AocdError::InvalidToken)
    }
}
