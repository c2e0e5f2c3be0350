//! Two-line status text for small panels.

use embedded_graphics::{
    Drawable,
    mono_font::{MonoTextStyle, ascii::FONT_4X6},
    prelude::Point,
    text::{Baseline, Text},
};
use smart_leds::RGB8;

use crate::frame::{Frame2d, rgb8_to_rgb888};

// Top-left corners of the two lines. The first line starts one row above the panel so both
// 6-pixel lines fit an 11-pixel-tall panel.
const LINE1: Point = Point::new(2, -1);
const LINE2: Point = Point::new(2, 5);

/// Draws `line1` and `line2` (either may be empty) over whatever is already in `frame`.
///
/// Characters past the right edge are clipped.
pub(crate) fn draw_lines<const W: usize, const H: usize>(
    frame: &mut Frame2d<W, H>,
    line1: &str,
    line2: &str,
    color: RGB8,
) {
    let style = MonoTextStyle::new(&FONT_4X6, rgb8_to_rgb888(color));
    for (line, position) in [(line1, LINE1), (line2, LINE2)] {
        if line.is_empty() {
            continue;
        }
        let Ok(_) = Text::with_baseline(line, position, style, Baseline::Top).draw(frame);
    }
}
