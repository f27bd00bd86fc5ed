// Puzzle dates.
// Validates (year, day) pairs and fills in defaults from the current event.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::error::{AocdError, Result};

/// First year with puzzles.
pub const FIRST_YEAR: i32 = 2015;

/// Last puzzle day of an event.
pub const LAST_DAY: u32 = 25;

/// Puzzles unlock at midnight UTC-5.
const UNLOCK_OFFSET_HOURS: i64 = 5;

/// A single puzzle, identified by event year and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleDate {
    pub year: i32,
    pub day: u32,
}

impl PuzzleDate {
    pub fn new(year: i32, day: u32) -> Result<Self> {
        if year < FIRST_YEAR {
            return Err(AocdError::PuzzleDate(format!(
                "year {} is before the first event ({})",
                year, FIRST_YEAR
            )));
        }
        if !(1..=LAST_DAY).contains(&day) {
            return Err(AocdError::PuzzleDate(format!(
                "day {} is outside 1-{}",
                day, LAST_DAY
            )));
        }
        Ok(Self { year, day })
    }

    /// Fill in a missing year or day from `now`.
    ///
    /// A missing day means today's puzzle, which only exists from Dec 1 to Dec 25.
    /// A missing year means the most recent event: this year in December,
    /// last year otherwise.
    pub fn resolve(year: Option<i32>, day: Option<u32>, now: DateTime<Utc>) -> Result<Self> {
        let today = puzzle_today(now);

        let year = year.unwrap_or_else(|| latest_event_year(today));
        let day = match day {
            Some(day) => day,
            None if today.month() == 12 && today.day() <= LAST_DAY => today.day(),
            None => {
                return Err(AocdError::PuzzleDate(format!(
                    "no puzzle unlocks on {}; pass a day explicitly",
                    today
                )));
            }
        };

        Self::new(year, day)
    }
}

/// Calendar date in the puzzle timezone.
fn puzzle_today(now: DateTime<Utc>) -> NaiveDate {
    (now - Duration::hours(UNLOCK_OFFSET_HOURS)).date_naive()
}

fn latest_event_year(today: NaiveDate) -> i32 {
    if today.month() == 12 {
        today.year()
    } else {
        today.year() - 1
    }
}
