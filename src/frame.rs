//! In-memory pixel buffers for strips ([`Frame1d`]) and panels ([`Frame2d`]).
//!
//! Both implement [`CalendarFrame`], the write interface the renderer uses. They differ in how
//! they treat addresses outside the buffer: a strip treats them as a wiring error, a panel
//! clips them like any graphics surface.

use core::{
    convert::Infallible,
    ops::{Deref, DerefMut},
};

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888, prelude::*};
use smart_leds::RGB8;

use crate::{Error, Result};

/// Pixel buffer the renderer can clear and write by address.
pub trait CalendarFrame: Clone + Default {
    /// How one pixel is addressed.
    type Address: Copy + PartialEq + core::fmt::Debug;

    /// Sets every pixel to black.
    fn clear(&mut self);

    /// Writes one pixel.
    ///
    /// # Errors
    ///
    /// Frames that cannot clip return [`Error::AddressOutOfBounds`].
    fn set_pixel(&mut self, address: Self::Address, color: RGB8) -> Result<()>;

    /// Reads one pixel, or `None` outside the frame.
    fn pixel(&self, address: Self::Address) -> Option<RGB8>;

    /// Position of `address` in the frame's storage order, or `None` outside the frame.
    fn storage_index(address: Self::Address) -> Option<usize>;
}

/// Convert `RGB8` (smart-leds) to `Rgb888` (embedded-graphics).
#[must_use]
pub const fn rgb8_to_rgb888(color: RGB8) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Fixed-size 1D LED strip frame.
///
/// Frames deref to `[RGB8; N]`, so pixels can also be mutated directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [RGB8; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [RGB8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CalendarFrame for Frame1d<N> {
    type Address = usize;

    fn clear(&mut self) {
        self.0.fill(RGB8::default());
    }

    fn set_pixel(&mut self, offset: usize, color: RGB8) -> Result<()> {
        let slot = self
            .0
            .get_mut(offset)
            .ok_or(Error::AddressOutOfBounds { offset, len: N })?;
        *slot = color;
        Ok(())
    }

    fn pixel(&self, offset: usize) -> Option<RGB8> {
        self.0.get(offset).copied()
    }

    fn storage_index(offset: usize) -> Option<usize> {
        (offset < N).then_some(offset)
    }
}

/// Fixed-size 2D panel frame, stored row by row.
///
/// Implements [`DrawTarget`] so status text can be drawn with `embedded-graphics`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame2d<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> Frame2d<W, H> {
    /// Frame2d width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Frame2d height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Total number of pixels (WIDTH × HEIGHT).
    pub const LEN: usize = W * H;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[RGB8::new(0, 0, 0); W]; H])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([[color; W]; H])
    }

    fn slot(&mut self, point: Point) -> Option<&mut RGB8> {
        let x_index = usize::try_from(point.x).ok()?;
        let y_index = usize::try_from(point.y).ok()?;
        self.0.get_mut(y_index)?.get_mut(x_index)
    }
}

impl<const W: usize, const H: usize> Deref for Frame2d<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for Frame2d<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Default for Frame2d<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> CalendarFrame for Frame2d<W, H> {
    type Address = Point;

    fn clear(&mut self) {
        for row in &mut self.0 {
            row.fill(RGB8::default());
        }
    }

    // Clips: a calendar wider than the panel simply loses its newest columns.
    fn set_pixel(&mut self, point: Point, color: RGB8) -> Result<()> {
        if let Some(slot) = self.slot(point) {
            *slot = color;
        }
        Ok(())
    }

    fn pixel(&self, point: Point) -> Option<RGB8> {
        let x_index = usize::try_from(point.x).ok()?;
        let y_index = usize::try_from(point.y).ok()?;
        self.0.get(y_index)?.get(x_index).copied()
    }

    fn storage_index(point: Point) -> Option<usize> {
        let x_index = usize::try_from(point.x).ok()?;
        let y_index = usize::try_from(point.y).ok()?;
        (x_index < W && y_index < H).then_some(y_index * W + x_index)
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Frame2d<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for Frame2d<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some(slot) = self.slot(coord) {
                *slot = RGB8::new(color.r(), color.g(), color.b());
            }
        }
        Ok(())
    }
}

/// How a chained WS2812 panel's single data line snakes through its `(x, y)` grid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelWiring {
    /// Every row runs left to right.
    ///
    /// ```text
    ///   LED0  LED1  LED2
    ///   LED3  LED4  LED5
    /// ```
    #[default]
    RowMajor,
    /// Strip snakes across rows.
    ///
    /// ```text
    ///   LED0  LED1  LED2
    ///   LED5  LED4  LED3
    /// ```
    SerpentineRowMajor,
    /// Strip snakes down columns.
    ///
    /// ```text
    ///   LED0  LED3  LED4
    ///   LED1  LED2  LED5
    /// ```
    SerpentineColumnMajor,
}

impl PanelWiring {
    /// Position on the data line of the pixel at column `x`, row `y` of a `width × height`
    /// panel.
    #[must_use]
    pub const fn led_index(self, x: usize, y: usize, width: usize, height: usize) -> usize {
        match self {
            Self::RowMajor => y * width + x,
            Self::SerpentineRowMajor => {
                if y % 2 == 0 {
                    y * width + x
                } else {
                    y * width + (width - 1 - x)
                }
            }
            Self::SerpentineColumnMajor => {
                if x % 2 == 0 {
                    x * height + y
                } else {
                    x * height + (height - 1 - y)
                }
            }
        }
    }
}

impl<const W: usize, const H: usize> Frame2d<W, H> {
    /// Reorders the panel into data-line order for a strip driver.
    ///
    /// `N` must equal `W * H`.
    #[must_use]
    pub fn to_strip<const N: usize>(&self, wiring: PanelWiring) -> Frame1d<N> {
        const { assert!(N == W * H, "N must equal W * H") };
        let mut strip = Frame1d::<N>::new();
        for (y_index, row) in self.0.iter().enumerate() {
            for (x_index, color) in row.iter().enumerate() {
                strip[wiring.led_index(x_index, y_index, W, H)] = *color;
            }
        }
        strip
    }
}
