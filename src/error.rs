use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Every variant is fatal for the refresh loop. [`Error::class`] groups them the way the
/// visible error screen reports them.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Wi-Fi SSID or password is empty.
    #[display("Wi-Fi credentials are not configured")]
    MissingWifiConfig,

    /// GitHub user name is empty.
    #[display("GitHub user is not configured")]
    MissingGithubUser,

    /// GitHub token is empty.
    #[display("GitHub token is not configured")]
    MissingGithubToken,

    /// The contribution request could not be completed.
    #[display("Contribution fetch failed: {reason}")]
    Fetch {
        /// Short description supplied by the transport.
        reason: &'static str,
    },

    /// The contribution response body was malformed.
    #[display("Contribution response could not be parsed: {reason}")]
    Parse {
        /// Short description supplied by the parser.
        reason: &'static str,
    },

    /// A calendar had more weeks than [`MAX_WEEKS`](crate::calendar::MAX_WEEKS).
    #[display("Calendar holds at most 54 weeks")]
    CalendarFull,

    /// A week had more than seven days.
    #[display("A week holds at most 7 days")]
    WeekFull,

    /// A strip write landed outside the strip.
    #[display("Pixel offset {offset} is outside a strip of {len} pixels")]
    AddressOutOfBounds {
        /// Computed linear offset.
        offset: usize,
        /// Number of pixels on the strip.
        len: usize,
    },

    /// A strip got a week newer than its last visible column.
    #[display("Week {week_number} is past the last shown week {last_week}")]
    WeekOutOfRange {
        /// 1-based week that did not fit.
        week_number: usize,
        /// Newest week the strip has a column for.
        last_week: usize,
    },

    /// Bucket limits were too short or decreasing.
    #[display("Bucket limits must be non-decreasing with at least two entries")]
    InvalidBucketLimits,

    /// The legend and the bucket limits disagree on the number of buckets.
    #[display("Legend has {legend_len} colors but the limits define {bucket_count} buckets")]
    LegendLengthMismatch {
        /// Number of legend colors supplied.
        legend_len: usize,
        /// Number of buckets implied by the limits.
        bucket_count: usize,
    },

    /// Brightness bounds or step were not usable.
    #[display("Brightness range or step is invalid")]
    InvalidBrightness,
}

/// Coarse error grouping used for the visible error indication.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorClass {
    /// Missing or inconsistent configuration, detected at startup.
    Config,
    /// Transport failure while fetching.
    Fetch,
    /// Malformed response.
    Parse,
    /// Calendar cell outside the strip.
    Address,
}

impl ErrorClass {
    /// Small number shown on displays that cannot render text (1-based).
    #[must_use]
    pub const fn code(self) -> usize {
        match self {
            Self::Config => 1,
            Self::Fetch => 2,
            Self::Parse => 3,
            Self::Address => 4,
        }
    }
}

impl Error {
    /// Which class of failure this is.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::MissingWifiConfig
            | Self::MissingGithubUser
            | Self::MissingGithubToken
            | Self::InvalidBucketLimits
            | Self::LegendLengthMismatch { .. }
            | Self::InvalidBrightness => ErrorClass::Config,
            Self::Fetch { .. } => ErrorClass::Fetch,
            Self::Parse { .. } | Self::CalendarFull | Self::WeekFull => ErrorClass::Parse,
            Self::AddressOutOfBounds { .. } | Self::WeekOutOfRange { .. } => ErrorClass::Address,
        }
    }

    /// Two short upper-case lines for the error screen of a text-capable panel.
    #[must_use]
    pub const fn short_message(&self) -> (&'static str, &'static str) {
        match self {
            Self::MissingWifiConfig => ("NO CONFIG", ""),
            Self::MissingGithubUser => ("NO GH USER", ""),
            Self::MissingGithubToken => ("NO GH TOKEN", ""),
            Self::Fetch { .. } => ("FETCH", "FAILED"),
            Self::Parse { .. } | Self::CalendarFull | Self::WeekFull => ("ERROR IN", "RESPONSE"),
            Self::AddressOutOfBounds { .. } | Self::WeekOutOfRange { .. } => ("BAD", "LAYOUT"),
            Self::InvalidBucketLimits
            | Self::LegendLengthMismatch { .. }
            | Self::InvalidBrightness => ("BAD", "CONFIG"),
        }
    }
}
