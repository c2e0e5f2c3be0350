//! Turn a [`Calendar`] into a brightness-scaled frame for any [`Topology`].
//!
//! Rendering is a pure function of its inputs: the same calendar, color scale and brightness
//! always give the same frame. Flushing the frame to hardware is the caller's job.

use smart_leds::RGB8;

use crate::Result;
use crate::calendar::Calendar;
use crate::frame::CalendarFrame;
use crate::palette::ColorScale;
use crate::topology::Topology;

/// Whether the renderer logs every day it paints.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trace {
    /// Quiet.
    #[default]
    Off,
    /// One debug line per day: date, count, bucket and pixel.
    Days,
}

/// Multiplies each channel by `brightness`, truncating toward zero.
///
/// ```rust
/// use contrib_glow::render::scale;
/// use smart_leds::RGB8;
///
/// assert_eq!(scale(RGB8::new(100, 100, 100), 0.02), RGB8::new(2, 2, 2));
/// ```
#[must_use]
pub fn scale(color: RGB8, brightness: f32) -> RGB8 {
    // `as` saturates: negative products become 0 and anything past 255 becomes 255.
    let channel = |value: u8| (f32::from(value) * brightness) as u8;
    RGB8::new(channel(color.r), channel(color.g), channel(color.b))
}

/// Clears `frame` and paints every day of `calendar` into it.
///
/// Weeks are visited oldest first and days in source order. Days whose week the topology does
/// not show are skipped.
///
/// # Errors
///
/// Returns [`Error::WeekOutOfRange`](crate::Error::WeekOutOfRange) when a strip topology has
/// no column for a week, and [`Error::AddressOutOfBounds`](crate::Error::AddressOutOfBounds)
/// when it maps a day past the end of the strip. The frame is left partly drawn.
pub fn render_into<T: Topology>(
    topology: &T,
    calendar: &Calendar,
    color_scale: &ColorScale,
    brightness: f32,
    frame: &mut T::Frame,
    trace: Trace,
) -> Result<()> {
    frame.clear();
    for (week_number, day_index, day) in calendar.iter_days() {
        let bucket = color_scale.limits().classify(day.count());
        let Some(address) = topology.map_cell(week_number, day_index)? else {
            continue;
        };
        if trace == Trace::Days {
            debug!(
                "week {} day {}: {} count {} bucket {} pixel {}",
                week_number,
                day_index,
                day.date(),
                day.count(),
                bucket,
                <T::Frame as CalendarFrame>::storage_index(address).unwrap_or(usize::MAX)
            );
        }
        let color = color_scale.legend().get(bucket).copied().unwrap_or_default();
        frame.set_pixel(address, scale(color, brightness))?;
    }
    Ok(())
}

/// Renders into a fresh frame.
///
/// # Errors
///
/// See [`render_into`].
pub fn render<T: Topology>(
    topology: &T,
    calendar: &Calendar,
    color_scale: &ColorScale,
    brightness: f32,
    trace: Trace,
) -> Result<T::Frame> {
    let mut frame = T::Frame::default();
    render_into(topology, calendar, color_scale, brightness, &mut frame, trace)?;
    Ok(frame)
}

/// Writes `color` at the topology's status pixel, leaving the rest of `frame` alone.
///
/// # Errors
///
/// Returns [`Error::AddressOutOfBounds`](crate::Error::AddressOutOfBounds) if the status pixel
/// is outside a strip.
pub fn paint_status<T: Topology>(topology: &T, frame: &mut T::Frame, color: RGB8) -> Result<()> {
    frame.set_pixel(topology.status_address(), color)
}
