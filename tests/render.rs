#![allow(missing_docs)]
//! Host-level tests for the frame renderer.

use contrib_glow::calendar::{Calendar, Week};
use contrib_glow::config::BoardProfile;
use contrib_glow::frame::{CalendarFrame, Frame1d, Frame2d};
use contrib_glow::palette::{ColorScale, GITHUB_DARK};
use contrib_glow::render::{Trace, paint_status, render, render_into, scale};
use contrib_glow::topology::{LinearRows, Matrix, Topology};
use contrib_glow::{Error, ErrorClass};
use embedded_graphics::prelude::Point;
use smart_leds::RGB8;

const BLACK: RGB8 = RGB8::new(0, 0, 0);

fn one_week(counts: &[u32]) -> Result<Calendar, Error> {
    let dates = [
        "2024-06-02",
        "2024-06-03",
        "2024-06-04",
        "2024-06-05",
        "2024-06-06",
        "2024-06-07",
        "2024-06-08",
    ];
    let mut calendar = Calendar::new();
    calendar.push_week(Week::from_days(dates.into_iter().zip(counts.iter().copied()))?)?;
    Ok(calendar)
}

fn weeks(count: usize, day_count: u32) -> Result<Calendar, Error> {
    let mut calendar = Calendar::new();
    for _ in 0..count {
        calendar.push_week(Week::from_days([("2024-01-01", day_count); 7])?)?;
    }
    Ok(calendar)
}

#[test]
fn brightness_truncates_toward_zero() {
    assert_eq!(scale(RGB8::new(100, 100, 100), 0.02), RGB8::new(2, 2, 2));
    assert_eq!(scale(RGB8::new(0x39, 0xd3, 0x53), 0.02), RGB8::new(1, 4, 1));
    assert_eq!(scale(RGB8::new(255, 128, 7), 1.0), RGB8::new(255, 128, 7));
    assert_eq!(scale(RGB8::new(255, 255, 255), 0.0), BLACK);
}

#[test]
fn single_zero_day_paints_only_its_cell() -> Result<(), Error> {
    let calendar = one_week(&[0])?;
    let panel: Matrix<8, 9> = Matrix::new(2);
    let frame = render(&panel, &calendar, &ColorScale::github_dark()?, 0.5, Trace::Off)?;

    let expected_color = scale(GITHUB_DARK[0], 0.5);
    let mut expected = Frame2d::<8, 9>::new();
    expected.set_pixel(Point::new(0, 2), expected_color)?;
    assert_eq!(frame, expected);
    assert_eq!(expected_color, RGB8::new(0x0b, 0x0d, 0x11));
    Ok(())
}

#[test]
fn strip_end_to_end_maps_every_day_of_a_week() -> Result<(), Error> {
    let calendar = one_week(&[0, 1, 20, 30, 40, 1000, 5])?;
    let strip: LinearRows<21> = LinearRows::new(3, 0);
    let frame = render(&strip, &calendar, &ColorScale::github_dark()?, 1.0, Trace::Days)?;

    let expected_buckets = [0, 1, 2, 3, 4, 4, 1];
    for (day_index, bucket) in expected_buckets.into_iter().enumerate() {
        assert_eq!(frame[day_index * 3], GITHUB_DARK[bucket], "day {day_index}");
        assert_eq!(frame[day_index * 3 + 1], BLACK);
        assert_eq!(frame[day_index * 3 + 2], BLACK);
    }
    Ok(())
}

#[test]
fn rendering_twice_gives_identical_frames() -> Result<(), Error> {
    let calendar = weeks(53, 7)?;
    let scale = ColorScale::github_dark()?;
    let strip: LinearRows<320> = LinearRows::new(40, 13);

    let first = render(&strip, &calendar, &scale, 0.02, Trace::Off)?;
    let mut second = Frame1d::<320>::filled(RGB8::new(200, 0, 0));
    render_into(&strip, &calendar, &scale, 0.02, &mut second, Trace::Off)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn skipped_weeks_stay_dark() -> Result<(), Error> {
    let calendar = weeks(13, 40)?;
    let strip: LinearRows<320> = LinearRows::new(40, 13);
    let frame = render(&strip, &calendar, &ColorScale::github_dark()?, 1.0, Trace::Off)?;
    assert_eq!(frame, Frame1d::<320>::new());
    Ok(())
}

#[test]
fn strip_overflow_stops_the_render() -> Result<(), Error> {
    let calendar = weeks(5, 1)?;
    let strip: LinearRows<16> = LinearRows::new(4, 0);
    let result = render(&strip, &calendar, &ColorScale::github_dark()?, 1.0, Trace::Off);
    assert_eq!(
        result,
        Err(Error::WeekOutOfRange {
            week_number: 5,
            last_week: 4
        })
    );
    Ok(())
}

#[test]
fn bling_rejects_a_54_week_calendar() -> Result<(), Error> {
    // Only week 54 has contributions; it has no column of its own.
    let mut calendar = weeks(53, 0)?;
    calendar.push_week(Week::from_days([("2024-12-29", 40); 7])?)?;

    let bling = BoardProfile::bling()?;
    let mut frame = Frame1d::<320>::new();
    let result = render_into(
        &bling.topology,
        &calendar,
        &bling.color_scale,
        1.0,
        &mut frame,
        Trace::Off,
    );
    assert_eq!(
        result,
        Err(Error::WeekOutOfRange {
            week_number: 54,
            last_week: 53
        })
    );
    assert_eq!(result.map_err(|error| error.class()), Err(ErrorClass::Address));
    // Week 14 day 1 still holds its own color, not week 54's.
    assert_eq!(frame[40], GITHUB_DARK[0]);
    Ok(())
}

#[test]
fn strip_past_its_end_stops_the_render() -> Result<(), Error> {
    let calendar = weeks(1, 1)?;
    let strip: LinearRows<10> = LinearRows::new(4, 0);
    let result = render(&strip, &calendar, &ColorScale::github_dark()?, 1.0, Trace::Off);
    assert_eq!(
        result,
        Err(Error::AddressOutOfBounds {
            offset: 12,
            len: 10
        })
    );
    Ok(())
}

#[test]
fn panel_clips_weeks_past_its_width() -> Result<(), Error> {
    let calendar = weeks(53, 40)?;
    let panel: Matrix<10, 11> = Matrix::new(2);
    let frame = render(&panel, &calendar, &ColorScale::github_dark()?, 1.0, Trace::Off)?;
    assert_eq!(frame[2], [GITHUB_DARK[4]; 10]);
    assert_eq!(frame[0], [BLACK; 10]);
    assert_eq!(frame[9], [BLACK; 10]);
    Ok(())
}

#[test]
fn status_pixel_survives_until_the_next_render() -> Result<(), Error> {
    let strip: LinearRows<320> = LinearRows::new(40, 13);
    let scale = ColorScale::github_dark()?;
    let status = RGB8::new(1, 1, 4);

    let mut frame = render(&strip, &Calendar::new(), &scale, 0.02, Trace::Off)?;
    frame[100] = RGB8::new(3, 3, 3);
    paint_status(&strip, &mut frame, status)?;
    assert_eq!(frame[0], status);
    assert_eq!(frame[100], RGB8::new(3, 3, 3));

    render_into(&strip, &Calendar::new(), &scale, 0.02, &mut frame, Trace::Off)?;
    assert_eq!(frame[0], BLACK);
    assert_eq!(frame[100], BLACK);
    Ok(())
}

#[test]
fn strip_error_screen_counts_out_the_error_class() {
    let strip: LinearRows<320> = LinearRows::new(40, 13);
    let red = RGB8::new(3, 0, 0);
    let mut frame = Frame1d::<320>::filled(RGB8::new(9, 9, 9));
    strip.draw_error(&mut frame, &Error::Parse { reason: "bad json" }, red);
    assert_eq!(frame[..3], [red; 3]);
    assert!(frame[3..].iter().all(|pixel| *pixel == BLACK));
}

#[test]
fn panel_message_draws_text_inside_the_frame() {
    let panel: Matrix<53, 11> = Matrix::new(2);
    let gray = RGB8::new(155, 155, 155);
    let mut frame = Frame2d::<53, 11>::filled(RGB8::new(0, 9, 0));
    panel.draw_message(&mut frame, "", "LOADING...", gray);

    let lit: Vec<(usize, usize)> = frame
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, pixel)| **pixel != BLACK)
                .map(move |(x, _)| (x, y))
        })
        .collect();
    assert!(!lit.is_empty());
    // Second line only: rows 5 through 10, starting at column 2.
    assert!(lit.iter().all(|&(x, y)| (5..11).contains(&y) && x >= 2));
    assert!(
        frame
            .iter()
            .flatten()
            .all(|pixel| *pixel == BLACK || *pixel == gray)
    );
}

#[test]
fn panel_error_screen_shows_short_message() {
    let panel: Matrix<53, 11> = Matrix::new(2);
    let red = RGB8::new(77, 0, 0);
    let mut with_error = Frame2d::<53, 11>::new();
    panel.draw_error(&mut with_error, &Error::MissingGithubToken, red);

    let mut with_text = Frame2d::<53, 11>::new();
    panel.draw_message(&mut with_text, "NO GH TOKEN", "", red);
    assert_eq!(with_error, with_text);
    assert_ne!(with_error, Frame2d::<53, 11>::new());
}
