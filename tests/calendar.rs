#![allow(missing_docs)]
//! Host-level tests for the calendar data model.

use contrib_glow::Error;
use contrib_glow::calendar::{Calendar, ContributionDay, MAX_WEEKS, Week};

#[test]
fn iter_days_numbers_weeks_from_one_and_days_from_zero() -> Result<(), Error> {
    let mut calendar = Calendar::new();
    calendar.push_week(Week::from_days([("2024-01-06", 4)])?)?;
    calendar.push_week(Week::from_days([
        ("2024-01-07", 0),
        ("2024-01-08", 2),
        ("2024-01-09", 9),
    ])?)?;

    let seen: Vec<(usize, usize, &str, u32)> = calendar
        .iter_days()
        .map(|(week, day_index, day)| (week, day_index, day.date(), day.count()))
        .collect();
    assert_eq!(
        seen,
        [
            (1, 0, "2024-01-06", 4),
            (2, 0, "2024-01-07", 0),
            (2, 1, "2024-01-08", 2),
            (2, 2, "2024-01-09", 9),
        ]
    );
    assert_eq!(calendar.week_count(), 2);
    assert_eq!(calendar.total_contributions(), 15);
    Ok(())
}

#[test]
fn week_rejects_an_eighth_day() -> Result<(), Error> {
    let mut week = Week::new();
    for _ in 0..7 {
        week.push(ContributionDay::new("2024-02-01", 1)?)?;
    }
    assert_eq!(
        week.push(ContributionDay::new("2024-02-08", 1)?),
        Err(Error::WeekFull)
    );
    assert_eq!(week.days().len(), 7);
    Ok(())
}

#[test]
fn calendar_rejects_weeks_past_capacity() -> Result<(), Error> {
    let mut calendar = Calendar::new();
    for _ in 0..MAX_WEEKS {
        calendar.push_week(Week::new())?;
    }
    assert_eq!(calendar.push_week(Week::new()), Err(Error::CalendarFull));
    Ok(())
}

#[test]
fn long_dates_are_a_parse_error() {
    assert!(matches!(
        ContributionDay::new("2024-02-01T00:00:00Z", 3),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn total_contributions_saturates() -> Result<(), Error> {
    let mut calendar = Calendar::new();
    calendar.push_week(Week::from_days([
        ("2024-03-01", u32::MAX),
        ("2024-03-02", 5),
    ])?)?;
    assert_eq!(calendar.total_contributions(), u32::MAX);
    Ok(())
}
