//! Current budgeting for WS2812 pixels.
//!
//! A WS2812 pixel draws about 60 mA with all three channels at 255. A strip sink caps every
//! channel so that the whole strip, lit white at full scale, stays inside a [`Current`] budget.
//! The cap is baked into a 256-entry lookup table once, at construction.
//!
//! ```rust
//! use contrib_glow::power::{Current, MA_PER_PIXEL, limit_table};
//!
//! // 320 pixels at 60 mA = 19.2 A worst case; a 2 A budget allows ~10% per channel.
//! let max = Current::Milliamps(2000).max_brightness(320 * MA_PER_PIXEL);
//! assert_eq!(max, 26);
//! assert_eq!(limit_table(max)[255], 26);
//! assert_eq!(Current::Unlimited.max_brightness(320 * MA_PER_PIXEL), 255);
//! ```

use smart_leds::RGB8;

/// Worst-case draw of one pixel (all channels at 255), in milliamps.
pub const MA_PER_PIXEL: u32 = 60;

/// Current budget for one strip or panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Current {
    /// Limit brightness to stay within a specific milliamp budget.
    Milliamps(u16),
    /// No limit; channels pass through unchanged.
    Unlimited,
}

impl Default for Current {
    fn default() -> Self {
        MAX_CURRENT_DEFAULT
    }
}

/// Default current budget (`Current::Milliamps(500)`, a USB 2.0 port).
pub const MAX_CURRENT_DEFAULT: Current = Current::Milliamps(500);

impl Current {
    /// Highest channel value (0..=255) that keeps `worst_case_ma` within this budget.
    #[must_use]
    pub const fn max_brightness(self, worst_case_ma: u32) -> u8 {
        assert!(worst_case_ma > 0, "worst_case_ma must be positive");
        match self {
            Self::Milliamps(ma) => {
                let scale = (ma as u32 * 255) / worst_case_ma;
                if scale > 255 { 255 } else { scale as u8 }
            }
            Self::Unlimited => 255,
        }
    }
}

/// Lookup table mapping a channel value to its current-limited value.
#[must_use]
pub const fn limit_table(max_brightness: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut index = 0;
    while index < 256 {
        table[index] = ((index as u16 * max_brightness as u16) / 255) as u8;
        index += 1;
    }
    table
}

/// Passes every channel of `pixels` through `table`.
pub fn apply_limit(pixels: &mut [RGB8], table: &[u8; 256]) {
    for color in pixels {
        *color = RGB8::new(
            table[usize::from(color.r)],
            table[usize::from(color.g)],
            table[usize::from(color.b)],
        );
    }
}
