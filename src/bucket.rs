//! Classify a day's contribution count into a discrete color bucket.
//!
//! See [`BucketLimits`] for the interval rules.

use heapless::Vec;

use crate::{Error, Result};

/// Most limits a [`BucketLimits`] can hold (so at most `MAX_LIMITS - 1` buckets).
pub const MAX_LIMITS: usize = 16;

/// Ordered lower bounds of the color buckets.
///
/// Bucket `i` covers the half-open interval `[limits[i], limits[i + 1])`. A count that matches
/// no interval (at or above the last limit) saturates into the topmost bucket, `len - 2`.
///
/// ```rust
/// use contrib_glow::bucket::BucketLimits;
///
/// let limits = BucketLimits::new(&[0, 1, 20, 30, 40])?;
/// assert_eq!(limits.bucket_count(), 4);
/// assert_eq!(limits.classify(0), 0);
/// assert_eq!(limits.classify(19), 1);
/// assert_eq!(limits.classify(1000), 3); // saturates
/// # Ok::<(), contrib_glow::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketLimits(Vec<u32, MAX_LIMITS>);

impl BucketLimits {
    /// Validates and copies the limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBucketLimits`] when there are fewer than two limits, more than
    /// [`MAX_LIMITS`], or the limits ever decrease.
    pub fn new(limits: &[u32]) -> Result<Self> {
        if limits.len() < 2 {
            return Err(Error::InvalidBucketLimits);
        }
        if limits
            .windows(2)
            .any(|pair| matches!(pair, [low, high] if low > high))
        {
            return Err(Error::InvalidBucketLimits);
        }
        let mut copy = Vec::new();
        copy.extend_from_slice(limits)
            .map_err(|()| Error::InvalidBucketLimits)?;
        Ok(Self(copy))
    }

    /// The limits as given.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Number of buckets (one fewer than the number of limits).
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Index of the bucket for `count`; always in `0..bucket_count()`.
    #[must_use]
    pub fn classify(&self, count: u32) -> usize {
        let overflow = self.0.len() - 2;
        self.0
            .windows(2)
            .position(|pair| matches!(pair, [low, high] if *low <= count && count < *high))
            .unwrap_or(overflow)
    }
}
