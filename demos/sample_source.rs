//! An offline [`ContributionSource`] that makes up a plausible year of contributions.
//!
//! The GitHub transport is not part of this crate; the demos use this instead so they run
//! without a network.
#![allow(dead_code, reason = "shared by demos that each use part of it")]

use core::fmt::Write as _;

use contrib_glow::calendar::{Calendar, ContributionDay, DAYS_PER_WEEK, Week};
use contrib_glow::refresh::ContributionSource;
use contrib_glow::{Error, Result};
use heapless::String;

/// Weeks in the sample year; the last one is partial.
pub const SAMPLE_WEEKS: usize = 53;

/// Builds a 53-week calendar from `seed`. Dates are ISO week dates (`2025-W07-3`).
pub fn sample_calendar(seed: u32) -> Result<Calendar> {
    let mut state = seed | 1;
    let mut calendar = Calendar::new();
    for week_number in 1..=SAMPLE_WEEKS {
        let days = if week_number == SAMPLE_WEEKS { 3 } else { DAYS_PER_WEEK };
        let mut week = Week::new();
        for day_index in 0..days {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let count = match state % 10 {
                0..=3 => 0,
                4..=7 => state % 12,
                _ => state % 50,
            };
            let mut date: String<10> = String::new();
            write!(date, "2025-W{:02}-{}", week_number, day_index + 1)
                .map_err(|_| Error::Parse { reason: "sample date" })?;
            week.push(ContributionDay::new(&date, count)?)?;
        }
        calendar.push_week(week)?;
    }
    Ok(calendar)
}

/// Serves [`sample_calendar`], with a new seed on every fetch.
pub struct SampleSource {
    seed: u32,
}

impl SampleSource {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl ContributionSource for SampleSource {
    async fn fetch_contributions(&mut self, _user: &str, _token: &str) -> Result<Calendar> {
        self.seed = self.seed.wrapping_add(0x9e37_79b9);
        sample_calendar(self.seed)
    }
}
