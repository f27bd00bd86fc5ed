// Advent of Code endpoint functions.

use reqwest::blocking::Response;

use crate::error::Result;

use super::client::AocClient;

/// Path of a day's puzzle input, relative to the site root.
pub fn input_endpoint(year: i32, day: u32) -> String {
    format!("/{}/day/{}/input", year, day)
}

impl AocClient {
    /// Request the puzzle input for a day.
    pub fn get_input(&self, session: &str, year: i32, day: u32) -> Result<Response> {
        self.get(&input_endpoint(year, day), session)
    }
}
