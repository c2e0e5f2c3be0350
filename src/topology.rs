//! Where each calendar cell lands on the physical pixels.
//!
//! Two arrangements are supported:
//!
//! - [`LinearRows`]: one strip of `N` pixels that visually forms rows of `row_count` pixels.
//!   Days become rows and weeks become columns, and the oldest `skip_weeks` weeks are dropped
//!   so the rest fits the row width.
//! - [`Matrix`]: a true `W × H` panel addressed by `(x, y)`, weeks along `x` and days along
//!   `y`, with an optional vertical margin and axis inversion.
//!
//! ```rust
//! use contrib_glow::topology::{LinearRows, Matrix, Topology};
//! use embedded_graphics::prelude::Point;
//!
//! let strip: LinearRows<320> = LinearRows::new(40, 13);
//! assert_eq!(strip.map_cell(14, 0), Ok(Some(0)));
//! assert_eq!(strip.map_cell(14, 1), Ok(Some(40)));
//! assert_eq!(strip.map_cell(13, 0), Ok(None)); // skipped
//! assert!(strip.map_cell(54, 0).is_err()); // no 41st column
//!
//! let panel: Matrix<53, 11> = Matrix::new(2);
//! assert_eq!(panel.map_cell(1, 0), Ok(Some(Point::new(0, 2))));
//! ```

use embedded_graphics::prelude::Point;
use smart_leds::RGB8;

use crate::frame::{CalendarFrame, Frame1d, Frame2d};
use crate::text;
use crate::{Error, Result};

/// The coordinate-mapping capability of a physical pixel arrangement.
///
/// The renderer only talks to this trait, so it does not care which arrangement it draws on.
pub trait Topology {
    /// Frame type holding one full image for this arrangement.
    type Frame: CalendarFrame;

    /// Pixel for day `day_index` (0-based) of week `week_number` (1-based, oldest first).
    ///
    /// Returns `Ok(None)` for weeks this arrangement deliberately leaves out.
    ///
    /// # Errors
    ///
    /// [`Error::WeekOutOfRange`] when an arrangement with a fixed number of columns gets a
    /// week past its last one.
    fn map_cell(
        &self,
        week_number: usize,
        day_index: usize,
    ) -> Result<Option<<Self::Frame as CalendarFrame>::Address>>;

    /// The reserved pixel lit while a fetch is in progress.
    fn status_address(&self) -> <Self::Frame as CalendarFrame>::Address;

    /// Draws a two-line status message (for example `LOADING...`) into a cleared frame.
    fn draw_message(&self, frame: &mut Self::Frame, line1: &str, line2: &str, color: RGB8);

    /// Draws a visible, class-specific indication of a fatal error into a cleared frame.
    fn draw_error(&self, frame: &mut Self::Frame, error: &Error, color: RGB8);
}

/// A strip of `N` pixels folded into rows of `row_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearRows<const N: usize> {
    row_count: usize,
    skip_weeks: usize,
}

impl<const N: usize> LinearRows<N> {
    /// Creates the mapping.
    ///
    /// `row_count` is the width of one visual row. Choose `skip_weeks` so the remaining weeks
    /// fit that width: a newer week is [`Error::WeekOutOfRange`], and a cell past the end of
    /// the strip is reported by the frame as [`Error::AddressOutOfBounds`].
    #[must_use]
    pub const fn new(row_count: usize, skip_weeks: usize) -> Self {
        assert!(row_count > 0, "row_count must be positive");
        assert!(row_count <= N, "row_count must not exceed the pixel count");
        Self {
            row_count,
            skip_weeks,
        }
    }

    /// Pixels per visual row.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Oldest weeks left out.
    #[must_use]
    pub const fn skip_weeks(&self) -> usize {
        self.skip_weeks
    }
}

impl<const N: usize> Topology for LinearRows<N> {
    type Frame = Frame1d<N>;

    fn map_cell(&self, week_number: usize, day_index: usize) -> Result<Option<usize>> {
        let Some(column) = week_number
            .checked_sub(self.skip_weeks)
            .and_then(|shown| shown.checked_sub(1))
        else {
            return Ok(None);
        };
        // Wrapping into the next row would paint over an older week.
        if column >= self.row_count {
            return Err(Error::WeekOutOfRange {
                week_number,
                last_week: self.skip_weeks.saturating_add(self.row_count),
            });
        }
        Ok(Some(
            day_index.saturating_mul(self.row_count).saturating_add(column),
        ))
    }

    fn status_address(&self) -> usize {
        0
    }

    // A strip cannot show text; the frame stays dark.
    fn draw_message(&self, frame: &mut Frame1d<N>, _line1: &str, _line2: &str, _color: RGB8) {
        frame.clear();
    }

    // Lights the first `class().code()` pixels so the failure class can be counted.
    fn draw_error(&self, frame: &mut Frame1d<N>, error: &Error, color: RGB8) {
        frame.clear();
        for slot in frame.iter_mut().take(error.class().code()) {
            *slot = color;
        }
    }
}

/// Axis inversion for a [`Matrix`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flip {
    /// Oldest week on the left, first day at the top.
    #[default]
    None,
    /// Mirror left and right.
    Horizontal,
    /// Mirror top and bottom.
    Vertical,
    /// Mirror both axes (a 180° rotation).
    Both,
}

/// A true `W × H` panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matrix<const W: usize, const H: usize> {
    offset_y: i32,
    flip: Flip,
}

impl<const W: usize, const H: usize> Matrix<W, H> {
    /// Creates the mapping with `offset_y` blank rows above the first day.
    #[must_use]
    pub const fn new(offset_y: i32) -> Self {
        Self {
            offset_y,
            flip: Flip::None,
        }
    }

    /// Same mapping with the given axis inversion.
    #[must_use]
    pub const fn with_flip(self, flip: Flip) -> Self {
        Self { flip, ..self }
    }

    /// Vertical margin above the first day.
    #[must_use]
    pub const fn offset_y(&self) -> i32 {
        self.offset_y
    }

    /// Axis inversion in use.
    #[must_use]
    pub const fn flip(&self) -> Flip {
        self.flip
    }
}

impl<const W: usize, const H: usize> Topology for Matrix<W, H> {
    type Frame = Frame2d<W, H>;

    // Never fails: weeks past the panel's width are clipped by the frame.
    fn map_cell(&self, week_number: usize, day_index: usize) -> Result<Option<Point>> {
        let Some(week_index) = week_number.checked_sub(1) else {
            return Ok(None);
        };
        let x = i32::try_from(week_index).unwrap_or(i32::MAX);
        let y = i32::try_from(day_index)
            .unwrap_or(i32::MAX)
            .saturating_add(self.offset_y);
        let last_x = i32::try_from(W).unwrap_or(i32::MAX).saturating_sub(1);
        let last_y = i32::try_from(H).unwrap_or(i32::MAX).saturating_sub(1);
        let (x, y) = match self.flip {
            Flip::None => (x, y),
            Flip::Horizontal => (last_x.saturating_sub(x), y),
            Flip::Vertical => (x, last_y.saturating_sub(y)),
            Flip::Both => (last_x.saturating_sub(x), last_y.saturating_sub(y)),
        };
        Ok(Some(Point::new(x, y)))
    }

    fn status_address(&self) -> Point {
        Point::zero()
    }

    fn draw_message(&self, frame: &mut Frame2d<W, H>, line1: &str, line2: &str, color: RGB8) {
        frame.clear();
        text::draw_lines(frame, line1, line2, color);
    }

    fn draw_error(&self, frame: &mut Frame2d<W, H>, error: &Error, color: RGB8) {
        let (line1, line2) = error.short_message();
        self.draw_message(frame, line1, line2, color);
    }
}
