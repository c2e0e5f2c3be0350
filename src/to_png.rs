#![cfg(feature = "host")]
//! PNG previews of frames, for looking at a calendar without hardware.
//!
//! Each pixel is drawn as a soft round LED on a black background. Real frames are often very
//! dim (a strip at 2% brightness), so every writer takes a linear `gain` applied before the
//! channels are clamped to 255.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};
use smart_leds::RGB8;

use crate::frame::{Frame1d, Frame2d};

/// Pixel geometry of a preview image.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PreviewLayout {
    columns: u32,
    rows: u32,
    cell_size: u32,
    led_radius: u32,
}

impl PreviewLayout {
    /// Largest layout for `columns × rows` LEDs whose longer side fits `target_max_dimension`.
    ///
    /// # Panics
    ///
    /// If the grid is empty or `target_max_dimension` is below 4. A grid too large for the
    /// target gets 4-pixel cells anyway.
    #[must_use]
    pub fn new(columns: u32, rows: u32, target_max_dimension: u32) -> Self {
        assert!(columns > 0 && rows > 0, "grid must not be empty");
        let mut cell_size = target_max_dimension;
        while cell_size > 4 {
            let layout = Self::with_cell_size(columns, rows, cell_size);
            if layout.width().max(layout.height()) <= target_max_dimension {
                return layout;
            }
            cell_size -= 1;
        }
        assert!(cell_size == 4, "target_max_dimension must be at least 4");
        Self::with_cell_size(columns, rows, cell_size)
    }

    fn with_cell_size(columns: u32, rows: u32, cell_size: u32) -> Self {
        let led_margin = (cell_size / 8).max(1);
        Self {
            columns,
            rows,
            cell_size,
            led_radius: (cell_size - led_margin * 2) / 2,
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.columns * self.cell_size + self.led_radius * 2
    }

    /// Image height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.rows * self.cell_size + self.led_radius * 2
    }

    /// Image coordinates of the center of the LED at `(column, row)`.
    #[must_use]
    pub const fn cell_center(&self, column: u32, row: u32) -> (u32, u32) {
        let center = (self.cell_size - 1) / 2;
        (
            self.led_radius + column * self.cell_size + center,
            self.led_radius + row * self.cell_size + center,
        )
    }
}

/// Writes a panel frame as a PNG.
///
/// # Errors
///
/// File creation or PNG encoding failures.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &Frame2d<W, H>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
    gain: f32,
) -> Result<PreviewLayout, Box<dyn Error>> {
    let layout = PreviewLayout::new(W as u32, H as u32, target_max_dimension);
    let pixels = grid_pixels(&layout, gain, |column, row| frame.0[row][column]);
    write_rgb_png(output_path.as_ref(), &layout, &pixels)?;
    Ok(layout)
}

/// Writes a strip frame folded into rows of `row_count`, the way it hangs on the wall.
///
/// Pixel `i` lands at column `i % row_count`, row `i / row_count`.
///
/// # Errors
///
/// File creation or PNG encoding failures.
pub fn write_strip_png<const N: usize>(
    frame: &Frame1d<N>,
    row_count: usize,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
    gain: f32,
) -> Result<PreviewLayout, Box<dyn Error>> {
    assert!(row_count > 0, "row_count must be positive");
    let rows = N.div_ceil(row_count);
    let layout = PreviewLayout::new(row_count as u32, rows as u32, target_max_dimension);
    let pixels = grid_pixels(&layout, gain, |column, row| {
        frame
            .get(row * row_count + column)
            .copied()
            .unwrap_or_default()
    });
    write_rgb_png(output_path.as_ref(), &layout, &pixels)?;
    Ok(layout)
}

fn write_rgb_png(
    output_path: &Path,
    layout: &PreviewLayout,
    pixels: &[u8],
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), layout.width(), layout.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    writer.finish()?;
    log::info!("wrote PNG to {}", output_path.display());
    Ok(())
}

fn grid_pixels(
    layout: &PreviewLayout,
    gain: f32,
    color_at: impl Fn(usize, usize) -> RGB8,
) -> Vec<u8> {
    let width = layout.width();
    let mut bytes = vec![0u8; (width * layout.height() * 3) as usize];
    let led_radius = layout.led_radius as i32;
    let fade_width = (layout.led_radius / 3).max(1) as f32;
    let inner_radius = layout.led_radius as f32 - fade_width;

    for row in 0..layout.rows {
        for column in 0..layout.columns {
            let color = color_at(column as usize, row as usize);
            if color == RGB8::default() {
                continue;
            }
            let (center_x, center_y) = layout.cell_center(column, row);
            for delta_y in -led_radius..=led_radius {
                for delta_x in -led_radius..=led_radius {
                    let distance_sq = delta_x * delta_x + delta_y * delta_y;
                    if distance_sq > led_radius * led_radius {
                        continue;
                    }
                    let distance = (distance_sq as f32).sqrt();
                    let intensity = if distance <= inner_radius {
                        1.0
                    } else {
                        (1.0 - (distance - inner_radius) / fade_width).max(0.0)
                    };
                    let x = center_x.saturating_add_signed(delta_x);
                    let y = center_y.saturating_add_signed(delta_y);
                    let index = ((y * width + x) * 3) as usize;
                    let amount = gain * intensity;
                    bytes[index] = channel(color.r, amount);
                    bytes[index + 1] = channel(color.g, amount);
                    bytes[index + 2] = channel(color.b, amount);
                }
            }
        }
    }
    bytes
}

fn channel(value: u8, amount: f32) -> u8 {
    (f32::from(value) * amount).round().clamp(0.0, 255.0) as u8
}
