//! Legends and the color scale that pairs them with [`BucketLimits`].

use heapless::Vec;
use smart_leds::RGB8;

use crate::bucket::{BucketLimits, MAX_LIMITS};
use crate::{Error, Result};

/// GitHub's dark-mode contribution colors, from "no contributions" to "many".
pub const GITHUB_DARK: [RGB8; 5] = [
    RGB8::new(0x16, 0x1b, 0x22),
    RGB8::new(0x0e, 0x44, 0x29),
    RGB8::new(0x00, 0x6d, 0x32),
    RGB8::new(0x26, 0xa6, 0x41),
    RGB8::new(0x39, 0xd3, 0x53),
];

/// GitHub's light-mode contribution colors, from "no contributions" to "many".
pub const GITHUB_LIGHT: [RGB8; 5] = [
    RGB8::new(0xeb, 0xed, 0xf0),
    RGB8::new(0x9b, 0xe9, 0xa8),
    RGB8::new(0x40, 0xc4, 0x63),
    RGB8::new(0x30, 0xa1, 0x4e),
    RGB8::new(0x21, 0x6e, 0x39),
];

/// Lower bounds paired with the five GitHub colors.
///
/// The last limit is `u32::MAX` so that 40 and above land in the fifth color while the
/// saturating rule of [`BucketLimits::classify`] still holds.
pub const GITHUB_LIMITS: [u32; 6] = [0, 1, 20, 30, 40, u32::MAX];

/// Colors, one per bucket.
pub type Legend = Vec<RGB8, { MAX_LIMITS - 1 }>;

/// Bucket limits plus a legend of matching length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorScale {
    limits: BucketLimits,
    legend: Legend,
}

impl ColorScale {
    /// Pairs `limits` with `legend`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LegendLengthMismatch`] unless `legend.len() == limits.len() - 1`.
    pub fn new(limits: BucketLimits, legend: &[RGB8]) -> Result<Self> {
        let bucket_count = limits.bucket_count();
        if legend.len() != bucket_count {
            return Err(Error::LegendLengthMismatch {
                legend_len: legend.len(),
                bucket_count,
            });
        }
        let mut colors = Legend::new();
        colors
            .extend_from_slice(legend)
            .map_err(|()| Error::LegendLengthMismatch {
                legend_len: legend.len(),
                bucket_count,
            })?;
        Ok(Self {
            limits,
            legend: colors,
        })
    }

    /// GitHub dark-mode colors with [`GITHUB_LIMITS`].
    ///
    /// # Errors
    ///
    /// Never fails in practice; the constants are valid.
    pub fn github_dark() -> Result<Self> {
        Self::new(BucketLimits::new(&GITHUB_LIMITS)?, &GITHUB_DARK)
    }

    /// GitHub light-mode colors with [`GITHUB_LIMITS`].
    ///
    /// # Errors
    ///
    /// Never fails in practice; the constants are valid.
    pub fn github_light() -> Result<Self> {
        Self::new(BucketLimits::new(&GITHUB_LIMITS)?, &GITHUB_LIGHT)
    }

    /// The bucket limits.
    #[must_use]
    pub const fn limits(&self) -> &BucketLimits {
        &self.limits
    }

    /// The legend colors.
    #[must_use]
    pub fn legend(&self) -> &[RGB8] {
        &self.legend
    }

    /// Unscaled legend color for a count.
    #[must_use]
    pub fn color_for(&self, count: u32) -> RGB8 {
        let bucket = self.limits.classify(count);
        // classify() stays below bucket_count(), which equals the legend length.
        self.legend.get(bucket).copied().unwrap_or_default()
    }
}
