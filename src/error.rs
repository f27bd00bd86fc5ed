// Error types for aocd.
// Covers HTTP failures, unexpected server responses, cache I/O and token/date resolution.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AocdError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Any status the fetcher does not know how to handle. Status and body are
    /// kept for diagnostics; the display stays short.
    #[error("Unexpected response")]
    UnexpectedResponse { status: u16, body: String },

    #[error("No session token: pass --session, set AOC_SESSION, or write one to the token file")]
    MissingToken,

    #[error("No token named '{0}' in tokens.json")]
    UnknownUser(String),

    #[error("Could not determine a config directory; set AOCD_DIR")]
    NoConfigDir,

    #[error("Invalid session token")]
    InvalidToken,

    #[error("Invalid puzzle date: {0}")]
    PuzzleDate(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AocdError>;
