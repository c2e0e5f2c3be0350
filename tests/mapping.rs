#![allow(missing_docs)]
//! Host-level tests for coordinate mapping and frame addressing.

use contrib_glow::Error;
use contrib_glow::frame::{CalendarFrame, Frame1d, Frame2d, PanelWiring};
use contrib_glow::topology::{Flip, LinearRows, Matrix, Topology};
use embedded_graphics::prelude::Point;
use smart_leds::RGB8;

const BLING: LinearRows<320> = LinearRows::new(40, 13);

#[test]
fn linear_rows_put_days_on_rows_and_weeks_on_columns() {
    assert_eq!(BLING.map_cell(14, 0), Ok(Some(0)));
    assert_eq!(BLING.map_cell(14, 1), Ok(Some(40)));
    assert_eq!(BLING.map_cell(15, 0), Ok(Some(1)));
    assert_eq!(BLING.map_cell(53, 6), Ok(Some(6 * 40 + 39)));
}

#[test]
fn linear_rows_skip_the_oldest_weeks() {
    for week_number in 0..=13 {
        assert_eq!(BLING.map_cell(week_number, 0), Ok(None), "week {week_number}");
    }
}

#[test]
fn linear_rows_reject_weeks_past_the_last_column() {
    // Week 54 would wrap to the start of the next row, on top of week 14.
    for day_index in 0..7 {
        assert_eq!(
            BLING.map_cell(54, day_index),
            Err(Error::WeekOutOfRange {
                week_number: 54,
                last_week: 53
            })
        );
    }
    let small: LinearRows<16> = LinearRows::new(4, 0);
    assert_eq!(small.map_cell(4, 3), Ok(Some(15)));
    assert!(small.map_cell(5, 0).is_err());
}

#[test]
fn linear_rows_past_the_strip_is_an_error_when_written() -> Result<(), Error> {
    // Rows of four on a ten-pixel strip: the fourth day runs off the end.
    let short: LinearRows<10> = LinearRows::new(4, 0);
    let Some(offset) = short.map_cell(1, 3)? else {
        panic!("week 1 should map");
    };
    assert_eq!(offset, 12);
    let mut frame = Frame1d::<10>::new();
    assert_eq!(
        frame.set_pixel(offset, RGB8::new(1, 1, 1)),
        Err(Error::AddressOutOfBounds {
            offset: 12,
            len: 10
        })
    );
    assert_eq!(frame, Frame1d::<10>::new());
    Ok(())
}

#[test]
fn matrix_uses_week_for_x_and_day_plus_margin_for_y() {
    let panel: Matrix<53, 11> = Matrix::new(2);
    assert_eq!(panel.map_cell(1, 0), Ok(Some(Point::new(0, 2))));
    assert_eq!(panel.map_cell(53, 6), Ok(Some(Point::new(52, 8))));
    assert_eq!(panel.map_cell(0, 0), Ok(None));
    // Past the width is not an error; the frame clips it.
    assert_eq!(panel.map_cell(54, 0), Ok(Some(Point::new(53, 2))));
    assert_eq!(panel.status_address(), Point::new(0, 0));
}

#[test]
fn matrix_flips_mirror_the_axes() {
    let panel: Matrix<53, 11> = Matrix::new(2);
    assert_eq!(panel.flip(), Flip::None);
    let mirrored = panel.with_flip(Flip::Horizontal);
    assert_eq!(mirrored.flip(), Flip::Horizontal);
    assert_eq!(mirrored.offset_y(), 2);
    assert_eq!(mirrored.map_cell(1, 0), Ok(Some(Point::new(52, 2))));
    assert_eq!(
        panel.with_flip(Flip::Vertical).map_cell(1, 0),
        Ok(Some(Point::new(0, 8)))
    );
    assert_eq!(
        panel.with_flip(Flip::Both).map_cell(53, 6),
        Ok(Some(Point::new(0, 2)))
    );
}

#[test]
fn panel_frame_clips_instead_of_failing() -> Result<(), Error> {
    let mut frame = Frame2d::<4, 3>::new();
    let color = RGB8::new(9, 9, 9);
    frame.set_pixel(Point::new(4, 0), color)?;
    frame.set_pixel(Point::new(0, -1), color)?;
    assert_eq!(frame, Frame2d::<4, 3>::new());

    frame.set_pixel(Point::new(3, 2), color)?;
    assert_eq!(frame.pixel(Point::new(3, 2)), Some(color));
    assert_eq!(frame.pixel(Point::new(4, 2)), None);
    Ok(())
}

#[test]
fn storage_index_follows_row_major_order() {
    assert_eq!(Frame2d::<4, 3>::storage_index(Point::new(1, 2)), Some(9));
    assert_eq!(Frame2d::<4, 3>::storage_index(Point::new(4, 0)), None);
    assert_eq!(Frame1d::<8>::storage_index(7), Some(7));
    assert_eq!(Frame1d::<8>::storage_index(8), None);
}

#[test]
fn panel_wiring_matches_chain_order() {
    // 3×2 panels, as drawn in the PanelWiring docs.
    let positions = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)];
    let index_of =
        |wiring: PanelWiring| positions.map(|(x, y)| wiring.led_index(x, y, 3, 2));
    assert_eq!(index_of(PanelWiring::RowMajor), [0, 1, 2, 3, 4, 5]);
    assert_eq!(index_of(PanelWiring::SerpentineRowMajor), [0, 1, 2, 5, 4, 3]);
    assert_eq!(index_of(PanelWiring::SerpentineColumnMajor), [0, 3, 4, 1, 2, 5]);
}

#[test]
fn to_strip_reorders_every_pixel() {
    let mut panel = Frame2d::<3, 2>::new();
    panel[1][0] = RGB8::new(1, 0, 0);
    panel[0][1] = RGB8::new(0, 2, 0);

    let strip: Frame1d<6> = panel.to_strip(PanelWiring::SerpentineColumnMajor);
    let mut expected = Frame1d::<6>::new();
    expected[1] = RGB8::new(1, 0, 0);
    expected[3] = RGB8::new(0, 2, 0);
    assert_eq!(strip, expected);
}
