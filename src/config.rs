//! Runtime configuration: credentials, loop timing, brightness and the two board presets.
//!
//! Everything here is fixed at startup. The only value that changes afterwards is the
//! brightness level inside [`BrightnessControl`].

use embassy_time::Duration;
use smart_leds::RGB8;

use crate::frame::CalendarFrame;
use crate::palette::ColorScale;
use crate::render::{Trace, scale};
use crate::topology::{LinearRows, Matrix, Topology};
use crate::{Error, Result};

/// Credentials the device needs before it can fetch anything.
///
/// Loading them (from flash, a file, or compiled-in constants) is the caller's concern.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Secrets<'a> {
    /// Wi-Fi network name.
    pub ssid: &'a str,
    /// Wi-Fi password.
    pub password: &'a str,
    /// GitHub login whose calendar is shown.
    pub gh_user: &'a str,
    /// GitHub token with read access to the user's contributions.
    pub gh_token: &'a str,
}

impl Secrets<'_> {
    /// Checks that every field is present.
    ///
    /// # Errors
    ///
    /// The first problem found, in this order: [`Error::MissingWifiConfig`],
    /// [`Error::MissingGithubUser`], [`Error::MissingGithubToken`].
    pub const fn validate(&self) -> Result<()> {
        if self.ssid.is_empty() || self.password.is_empty() {
            return Err(Error::MissingWifiConfig);
        }
        if self.gh_user.is_empty() {
            return Err(Error::MissingGithubUser);
        }
        if self.gh_token.is_empty() {
            return Err(Error::MissingGithubToken);
        }
        Ok(())
    }
}

/// Default time between automatic refreshes.
pub const REFRESH_INTERVAL_DEFAULT: Duration = Duration::from_secs(300);
/// Default sleep when nothing happened in a loop iteration.
pub const IDLE_POLL_DEFAULT: Duration = Duration::from_millis(500);
/// Default sleep after a brightness step.
pub const BRIGHTNESS_DEBOUNCE_DEFAULT: Duration = Duration::from_millis(250);

/// Timing of the refresh loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RefreshConfig {
    /// A refresh happens once strictly more than this has passed since the last one.
    pub interval: Duration,
    /// Sleep when the loop had nothing to do.
    pub idle_poll: Duration,
    /// Sleep after a brightness step, which limits how fast a held button repeats.
    pub brightness_debounce: Duration,
}

impl RefreshConfig {
    /// 300 s interval, 500 ms idle poll, 250 ms brightness debounce.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interval: REFRESH_INTERVAL_DEFAULT,
            idle_poll: IDLE_POLL_DEFAULT,
            brightness_debounce: BRIGHTNESS_DEBOUNCE_DEFAULT,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A brightness level kept inside `[min, max]` and moved in fixed steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrightnessControl {
    level: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl BrightnessControl {
    /// Creates the control; `level` is clamped into `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBrightness`] unless `0 <= min <= max` and `step > 0`
    /// (all finite).
    pub fn new(level: f32, min: f32, max: f32, step: f32) -> Result<Self> {
        let finite = level.is_finite() && min.is_finite() && max.is_finite() && step.is_finite();
        if !finite || min < 0.0 || min > max || step <= 0.0 {
            return Err(Error::InvalidBrightness);
        }
        Ok(Self {
            level: level.clamp(min, max),
            min,
            max,
            step,
        })
    }

    /// Current level.
    #[must_use]
    pub const fn level(&self) -> f32 {
        self.level
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Current level in tenths of a percent, rounded to nearest.
    #[must_use]
    pub fn per_mille(&self) -> u32 {
        // Levels are never negative, so adding one half rounds.
        (self.level * 1000.0 + 0.5) as u32
    }

    /// One step up, stopping at `max`. Returns the new level.
    pub fn increase(&mut self) -> f32 {
        self.level = (self.level + self.step).min(self.max);
        self.level
    }

    /// One step down, stopping at `min`. Returns the new level.
    pub fn decrease(&mut self) -> f32 {
        self.level = (self.level - self.step).max(self.min);
        self.level
    }

    /// `color` at the current level, truncated toward zero.
    #[must_use]
    pub fn scale(&self, color: RGB8) -> RGB8 {
        scale(color, self.level)
    }
}

/// The Pimoroni Bling strip: 320 pixels folded into 8 rows of 40.
pub type BlingStrip = LinearRows<320>;

/// The Pimoroni Galactic Unicorn panel: 53 × 11 pixels.
pub type GalacticUnicorn = Matrix<53, 11>;

/// Everything that differs between one display board and another.
#[derive(Clone, Debug)]
pub struct BoardProfile<T: Topology> {
    /// Pixel arrangement.
    pub topology: T,
    /// Bucket limits and legend.
    pub color_scale: ColorScale,
    /// Initial brightness and its bounds.
    pub brightness: BrightnessControl,
    /// Loop timing.
    pub refresh: RefreshConfig,
    /// Color of the status pixel while fetching.
    pub status_color: RGB8,
    /// Whether the very first fetch also lights the status pixel.
    pub status_on_start: bool,
    /// Pixel lit (in `status_color`) right after power-up, before anything else happens.
    pub boot_marker: Option<<T::Frame as CalendarFrame>::Address>,
    /// Color of status messages.
    pub text_color: RGB8,
    /// Color of the error screen.
    pub error_color: RGB8,
    /// Per-day logging for renders after a fetch.
    pub trace: Trace,
}

const STATUS_PURPLE: RGB8 = RGB8::new(0x53, 0x39, 0xd3);
const STATUS_GREEN: RGB8 = RGB8::new(0x39, 0xd3, 0x53);
const TEXT_GRAY: RGB8 = RGB8::new(155, 155, 155);
const ERROR_RED: RGB8 = RGB8::new(155, 0, 0);

impl BoardProfile<BlingStrip> {
    /// 320-pixel strip, rows of 40, oldest 13 weeks skipped, dim by default.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the constants are valid.
    pub fn bling() -> Result<Self> {
        Ok(Self {
            topology: LinearRows::new(40, 13),
            color_scale: ColorScale::github_dark()?,
            brightness: BrightnessControl::new(0.02, 0.01, 0.02, 0.005)?,
            refresh: RefreshConfig::new(),
            status_color: STATUS_PURPLE,
            status_on_start: true,
            boot_marker: Some(80),
            text_color: TEXT_GRAY,
            error_color: ERROR_RED,
            trace: Trace::Days,
        })
    }
}

impl BoardProfile<GalacticUnicorn> {
    /// 53 × 11 panel, calendar two rows down, half brightness.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the constants are valid.
    pub fn galactic_unicorn() -> Result<Self> {
        Ok(Self {
            topology: Matrix::new(2),
            color_scale: ColorScale::github_dark()?,
            brightness: BrightnessControl::new(0.5, 0.0, 1.0, 0.05)?,
            refresh: RefreshConfig::new(),
            status_color: STATUS_GREEN,
            status_on_start: false,
            boot_marker: None,
            text_color: TEXT_GRAY,
            error_color: ERROR_RED,
            trace: Trace::Off,
        })
    }
}
