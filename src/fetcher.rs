// Puzzle input retrieval.
// Serves inputs from the per-token cache and falls back to the network, persisting what it fetches.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, error};
use reqwest::StatusCode;
use reqwest::blocking::Response;

use crate::aoc::rate_limit::{self, Sleeper, ThreadSleeper, Throttle};
use crate::aoc::AocClient;
use crate::cache;
use crate::error::{AocdError, Result};

/// Resolves (session, year, day) to puzzle input text.
pub struct Fetcher<S: Sleeper = ThreadSleeper> {
    client: AocClient,
    cache_root: PathBuf,
    sleeper: S,
    throttle: Option<Throttle>,
}

impl Fetcher<ThreadSleeper> {
    /// Fetcher for adventofcode.com caching under `cache_root`.
    pub fn new(cache_root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_parts(AocClient::new()?, cache_root, ThreadSleeper))
    }
}

impl<S: Sleeper> Fetcher<S> {
    pub fn with_parts(client: AocClient, cache_root: impl Into<PathBuf>, sleeper: S) -> Self {
        Self {
            client,
            cache_root: cache_root.into(),
            sleeper,
            throttle: None,
        }
    }

    /// Keep network requests at least `interval` apart.
    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.throttle = Some(Throttle::new(interval));
        self
    }

    /// Get the puzzle input, from the cache when present, otherwise from the site.
    ///
    /// A 429 is retried exactly once after sleeping for the server's Retry-After;
    /// the retry does not look at the cache again. Any other non-200 status is
    /// logged and returned as [`AocdError::UnexpectedResponse`].
    pub fn get_data(&mut self, session: &str, year: i32, day: u32) -> Result<String> {
        let path = cache::input_path(&self.cache_root, session, year, day)?;

        if let Some(data) = cache::read_input(&path)? {
            debug!("cache hit for {}/{} at {}", year, day, path.display());
            return Ok(data);
        }
        debug!("cache miss for {}/{}", year, day);

        if let Some(wait) = self.throttle_wait() {
            self.pause(wait);
        }

        let mut response = self.send(session, year, day)?;
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let wait = rate_limit::retry_after(response.headers());
            self.pause(wait);
            response = self.send(session, year, day)?;
        }

        self.accept(response, &path)
    }

    fn throttle_wait(&self) -> Option<Duration> {
        let wait = self.throttle.as_ref()?.remaining(Instant::now());
        (!wait.is_zero()).then_some(wait)
    }

    fn pause(&self, wait: Duration) {
        for line in rate_limit::notice(wait) {
            eprintln!("{}", line);
            debug!("{}", line);
        }
        self.sleeper.sleep(wait);
    }

    fn send(&mut self, session: &str, year: i32, day: u32) -> Result<Response> {
        let response = self.client.get_input(session, year, day)?;
        if let Some(throttle) = self.throttle.as_mut() {
            throttle.record(Instant::now());
        }
        Ok(response)
    }

    /// Persist a 200 response and return its body; anything else is an error.
    fn accept(&self, response: Response, path: &Path) -> Result<String> {
        let status = response.status();
        let body = response.bytes()?;

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&body).into_owned();
            error!("got {} status code", status.as_u16());
            error!("{}", body);
            return Err(AocdError::UnexpectedResponse {
                status: status.as_u16(),
                body,
            });
        }

        let data = String::from_utf8(body.to_vec())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        cache::write_text(path, &data)?;
        debug!("cached {} bytes at {}", data.len(), path.display());

        Ok(data)
    }
}
