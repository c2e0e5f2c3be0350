//! Contribution calendar data: days, weeks, and the calendar that owns them.
//!
//! A [`Calendar`] is built once per fetch and then only read. Capacities are fixed so the
//! whole calendar lives without an allocator.

use heapless::{String, Vec};

use crate::{Error, Result};

/// Days in a full week.
pub const DAYS_PER_WEEK: usize = 7;

/// Most weeks a calendar can hold. A one-year window spans 53 weeks, 54 at most.
pub const MAX_WEEKS: usize = 54;

/// Length of an ISO calendar date such as `2024-03-17`.
pub const DATE_LEN: usize = 10;

/// One day of the calendar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContributionDay {
    date: String<DATE_LEN>,
    count: u32,
}

impl ContributionDay {
    /// Creates a day from its date string and contribution count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `date` is longer than [`DATE_LEN`].
    pub fn new(date: &str, count: u32) -> Result<Self> {
        let mut owned = String::new();
        owned.push_str(date).map_err(|()| Error::Parse {
            reason: "date longer than 10 characters",
        })?;
        Ok(Self { date: owned, count })
    }

    /// The date as reported by the data source.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Contributions made on this day.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

/// Up to seven days in source order.
///
/// The oldest and newest weeks of a one-year window are usually partial; their days keep the
/// positions the data source gave them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Week {
    days: Vec<ContributionDay, DAYS_PER_WEEK>,
}

impl Week {
    /// An empty week.
    #[must_use]
    pub const fn new() -> Self {
        Self { days: Vec::new() }
    }

    /// Builds a week from `(date, count)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WeekFull`] for more than seven days, or [`Error::Parse`] for a bad date.
    pub fn from_days<'a>(days: impl IntoIterator<Item = (&'a str, u32)>) -> Result<Self> {
        let mut week = Self::new();
        for (date, count) in days {
            week.push(ContributionDay::new(date, count)?)?;
        }
        Ok(week)
    }

    /// Appends the next day.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WeekFull`] when the week already has seven days.
    pub fn push(&mut self, day: ContributionDay) -> Result<()> {
        self.days.push(day).map_err(|_| Error::WeekFull)
    }

    /// The days in source order.
    #[must_use]
    pub fn days(&self) -> &[ContributionDay] {
        &self.days
    }
}

/// Weeks of contributions, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Calendar {
    weeks: Vec<Week, MAX_WEEKS>,
}

impl Calendar {
    /// An empty calendar.
    #[must_use]
    pub const fn new() -> Self {
        Self { weeks: Vec::new() }
    }

    /// Appends the next (newer) week.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CalendarFull`] past [`MAX_WEEKS`].
    pub fn push_week(&mut self, week: Week) -> Result<()> {
        self.weeks.push(week).map_err(|_| Error::CalendarFull)
    }

    /// The weeks, oldest first.
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Number of weeks.
    #[must_use]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Sum of all day counts.
    #[must_use]
    pub fn total_contributions(&self) -> u32 {
        self.iter_days()
            .fold(0u32, |total, (_, _, day)| total.saturating_add(day.count()))
    }

    /// Every day as `(week_number, day_index, day)`.
    ///
    /// `week_number` starts at 1 for the oldest week; `day_index` starts at 0 within a week.
    pub fn iter_days(&self) -> impl Iterator<Item = (usize, usize, &ContributionDay)> + '_ {
        self.weeks.iter().zip(1..).flat_map(|(week, week_number)| {
            week.days()
                .iter()
                .enumerate()
                .map(move |(day_index, day)| (week_number, day_index, day))
        })
    }
}
