// Advent of Code HTTP client.
// Handles session authentication and the tool's User-Agent for every request.

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{AocdError, Result};

pub const AOC_BASE_URL: &str = "https://adventofcode.com";

/// Sent on every request so the site can identify the tool.
pub const USER_AGENT_VALUE: &str = concat!("aocd.rs/v", env!("CARGO_PKG_VERSION"));

/// Blocking client for the Advent of Code website.
pub struct AocClient {
    client: Client,
    base_url: String,
}

impl AocClient {
    /// Create a client for adventofcode.com.
    pub fn new() -> Result<Self> {
        Self::with_base_url(AOC_BASE_URL)
    }

    /// Create a client against a different host, e.g. a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(AocdError::Http)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an authenticated GET request. The status is left for the caller to judge.
    pub fn get(&self, endpoint: &str, session: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let cookie = HeaderValue::from_str(&format!("session={}", session))
            .map_err(|_| AocdError::InvalidToken)?;

        debug!("GET {}", url);
        let response = self.client.get(&url).header(COOKIE, cookie).send()?;
        debug!("GET {} -> {}", url, response.status());

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT_VALUE.starts_with("aocd.rs/v"));
        assert!(USER_AGENT_VALUE.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AocClient::with_base_url("http://127.0.0.1:9999/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_default_base_url() {
        let client = AocClient::new().unwrap();
        assert_eq!(client.base_url(), AOC_BASE_URL);
    }
}
