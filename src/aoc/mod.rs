// Advent of Code API module.
// Provides the HTTP client, endpoints and rate limit helpers.

pub mod client;
pub mod endpoints;
pub mod rate_limit;

pub use client::{AOC_BASE_URL, AocClient, USER_AGENT_VALUE};
pub use endpoints::input_endpoint;
pub use rate_limit::{DEFAULT_RATE_LIMIT_WAIT, Sleeper, ThreadSleeper, Throttle};
