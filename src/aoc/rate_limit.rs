// Rate limit handling.
// Parses server cool-downs, formats the user notice, and spaces requests client-side.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Wait used when a 429 arrives without a usable Retry-After header.
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(1);

/// Blocks the calling thread. Swappable so tests can observe waits without taking them.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Sleeper backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Wait requested by the server's Retry-After header.
pub fn retry_after(headers: &HeaderMap) -> Duration {
    retry_after_at(headers, Utc::now())
}

/// Same as [`retry_after`], with an explicit clock for HTTP-date values.
///
/// Accepts decimal seconds or an RFC 2822 date; dates in the past yield zero.
pub fn retry_after_at(headers: &HeaderMap, now: DateTime<Utc>) -> Duration {
    let Some(value) = headers.get(RETRY_AFTER).and_then(|v| v.to_str().ok()) else {
        return DEFAULT_RATE_LIMIT_WAIT;
    };
    let value = value.trim();

    if let Ok(secs) = value.parse::<f64>() {
        return Duration::try_from_secs_f64(secs).unwrap_or(DEFAULT_RATE_LIMIT_WAIT);
    }

    match DateTime::parse_from_rfc2822(value) {
        Ok(at) => at
            .with_timezone(&Utc)
            .signed_duration_since(now)
            .to_std()
            .unwrap_or(Duration::ZERO),
        Err(_) => DEFAULT_RATE_LIMIT_WAIT,
    }
}

/// The two lines shown to the user before sleeping.
pub fn notice(wait: Duration) -> [String; 2] {
    [
        "You are being rate-limited.".to_string(),
        format!("Sleeping {} seconds...", wait.as_secs_f64()),
    ]
}

/// Keeps consecutive requests at least `interval` apart.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_request: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: None,
        }
    }

    /// Time left before another request may be sent.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_request {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Mark a request as sent.
    pub fn record(&mut self, at: Instant) {
        self.last_request = Some(at);
    }
}
