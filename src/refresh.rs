//! The refresh loop: when to fetch, when to redraw, and how brightness buttons are handled.
//!
//! [`RefreshScheduler`] owns everything the loop touches (the board profile, the cached
//! calendar, the frame, the brightness level and the last-refresh instant) and talks to the
//! outside world only through four collaborators:
//!
//! - [`ContributionSource`] fetches a fresh [`Calendar`].
//! - [`ControlInputs`] reports which buttons are held.
//! - [`FrameSink`] pushes a finished frame to the pixels.
//! - [`Clock`] tells the time and sleeps.
//!
//! The loop is single-threaded and cooperative. A fetch blocks everything else, including
//! the buttons, until it completes.
//!
//! Every error is fatal. [`RefreshScheduler::run`] returns the first one, and
//! [`RefreshScheduler::halt`] shows it and never returns.
//!
//! ```rust,no_run
//! # use contrib_glow::{Result, calendar::Calendar, config::{BoardProfile, Secrets}};
//! # use contrib_glow::frame::Frame1d;
//! # use contrib_glow::refresh::{Clock, ContributionSource, ControlInputs, FrameSink, RefreshScheduler};
//! # use embassy_time::{Duration, Instant};
//! # struct Api; struct Buttons; struct Strip; struct Time;
//! # impl ContributionSource for Api {
//! #     async fn fetch_contributions(&mut self, _: &str, _: &str) -> Result<Calendar> { Ok(Calendar::new()) }
//! # }
//! # impl ControlInputs for Buttons {
//! #     fn refresh_requested(&mut self) -> bool { false }
//! #     fn brightness_up(&mut self) -> bool { false }
//! #     fn brightness_down(&mut self) -> bool { false }
//! # }
//! # impl FrameSink<Frame1d<320>> for Strip { async fn flush(&mut self, _: &Frame1d<320>) {} }
//! # impl Clock for Time {
//! #     fn now(&self) -> Instant { Instant::from_secs(0) }
//! #     async fn sleep(&mut self, _: Duration) {}
//! # }
//! async fn example(secrets: Secrets<'_>) -> ! {
//!     let Ok(profile) = BoardProfile::bling() else { loop {} };
//!     let mut scheduler = RefreshScheduler::new(profile, secrets, Api, Buttons, Strip, Time);
//!     scheduler.show_boot().await;
//!     let Err(error) = scheduler.run().await;
//!     scheduler.halt(error).await
//! }
//! ```

use core::convert::Infallible;

use embassy_time::{Duration, Instant};
use smart_leds::RGB8;

use crate::calendar::Calendar;
use crate::config::{BoardProfile, BrightnessControl, Secrets};
use crate::frame::CalendarFrame;
use crate::render::{Trace, paint_status, render_into};
use crate::topology::Topology;
use crate::{Error, Result};

/// Fetches the contribution calendar of one user.
pub trait ContributionSource {
    /// Fetches the current calendar, oldest week first.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`] for transport failures, [`Error::Parse`] (or the calendar's capacity
    /// errors) for a malformed response.
    async fn fetch_contributions(&mut self, user: &str, token: &str) -> Result<Calendar>;
}

/// The buttons the loop reads, sampled once per iteration while held.
pub trait ControlInputs {
    /// Whether a refresh is requested right now.
    fn refresh_requested(&mut self) -> bool;
    /// Whether the brighter button is held.
    fn brightness_up(&mut self) -> bool;
    /// Whether the dimmer button is held.
    fn brightness_down(&mut self) -> bool;
}

/// Pushes a finished frame to the pixels. Assumed to always succeed.
pub trait FrameSink<F> {
    /// Shows `frame`.
    async fn flush(&mut self, frame: &F);
}

/// Monotonic time and sleeping.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
    /// Suspends the loop for `duration`.
    async fn sleep(&mut self, duration: Duration);
}

/// What the loop is doing right now.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerState {
    /// Waiting for the interval to pass or a button.
    #[default]
    Idle,
    /// Fetching, rendering and flushing a new calendar.
    Refreshing,
    /// Applying a brightness step and waiting out the debounce.
    AdjustingBrightness,
    /// Stopped on a fatal error; the error screen is showing.
    Halted,
}

/// Direction of a brightness step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrightnessChange {
    /// One step brighter.
    Up,
    /// One step dimmer.
    Down,
}

/// What one [`RefreshScheduler::step`] did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// A fetch-render-flush cycle ran.
    pub refreshed: bool,
    /// A brightness step was applied (and the debounce slept).
    pub brightness: Option<BrightnessChange>,
}

/// Fixed two-line messages shown while the device comes up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    /// Joining the Wi-Fi network.
    Connecting,
    /// Wi-Fi joined.
    Connected,
    /// First fetch under way.
    Loading,
}

impl Message {
    /// The two lines of text.
    #[must_use]
    pub const fn lines(self) -> (&'static str, &'static str) {
        match self {
            Self::Connecting => ("CONNECT...", ""),
            Self::Connected => ("", "OK!"),
            Self::Loading => ("", "LOADING..."),
        }
    }
}

/// The refresh loop and all of the state it owns.
///
/// See the [module documentation](mod@crate::refresh) for an example.
pub struct RefreshScheduler<'a, T, S, I, F, C>
where
    T: Topology,
{
    profile: BoardProfile<T>,
    secrets: Secrets<'a>,
    source: S,
    inputs: I,
    sink: F,
    clock: C,
    calendar: Calendar,
    frame: T::Frame,
    last_refresh: Option<Instant>,
    state: SchedulerState,
}

impl<'a, T, S, I, F, C> RefreshScheduler<'a, T, S, I, F, C>
where
    T: Topology,
    S: ContributionSource,
    I: ControlInputs,
    F: FrameSink<T::Frame>,
    C: Clock,
{
    /// Assembles the loop. Nothing is shown or fetched until [`start`](Self::start).
    #[must_use]
    pub fn new(
        profile: BoardProfile<T>,
        secrets: Secrets<'a>,
        source: S,
        inputs: I,
        sink: F,
        clock: C,
    ) -> Self {
        Self {
            profile,
            secrets,
            source,
            inputs,
            sink,
            clock,
            calendar: Calendar::new(),
            frame: T::Frame::default(),
            last_refresh: None,
            state: SchedulerState::Idle,
        }
    }

    /// Clears the pixels and lights the board's boot marker, if it has one.
    pub async fn show_boot(&mut self) {
        self.frame.clear();
        if let Some(address) = self.profile.boot_marker {
            let color = self.scaled(self.profile.status_color);
            // A marker outside the frame just stays dark.
            if self.frame.set_pixel(address, color).is_err() {
                warn!("boot marker is outside the frame");
            }
        }
        self.sink.flush(&self.frame).await;
    }

    /// Shows one of the fixed start-up messages.
    pub async fn show_message(&mut self, message: Message) {
        let (line1, line2) = message.lines();
        self.show_text(line1, line2).await;
    }

    /// Shows two lines of text (strips just go dark).
    pub async fn show_text(&mut self, line1: &str, line2: &str) {
        let color = self.scaled(self.profile.text_color);
        self.profile
            .topology
            .draw_message(&mut self.frame, line1, line2, color);
        self.sink.flush(&self.frame).await;
    }

    /// Checks the credentials, shows `LOADING...` and runs the first refresh.
    ///
    /// # Errors
    ///
    /// A configuration error from [`Secrets::validate`], or any refresh error.
    pub async fn start(&mut self) -> Result<()> {
        self.secrets.validate()?;
        self.show_message(Message::Loading).await;
        self.refresh(self.profile.status_on_start).await
    }

    /// Fetches a new calendar, renders it and flushes it.
    ///
    /// With `show_status`, the status pixel is lit and flushed before the fetch starts, on top
    /// of whatever is showing.
    ///
    /// # Errors
    ///
    /// Any fetch or render error. The previous calendar stays cached.
    pub async fn refresh(&mut self, show_status: bool) -> Result<()> {
        self.state = SchedulerState::Refreshing;
        if show_status {
            let color = self.scaled(self.profile.status_color);
            paint_status(&self.profile.topology, &mut self.frame, color)?;
            self.sink.flush(&self.frame).await;
        }

        info!("fetching contributions for {}", self.secrets.gh_user);
        let calendar = self
            .source
            .fetch_contributions(self.secrets.gh_user, self.secrets.gh_token)
            .await?;
        self.calendar = calendar;
        info!(
            "fetched {} weeks, {} contributions",
            self.calendar.week_count(),
            self.calendar.total_contributions()
        );

        self.redraw(self.profile.trace)?;
        self.sink.flush(&self.frame).await;
        self.last_refresh = Some(self.clock.now());
        self.state = SchedulerState::Idle;
        Ok(())
    }

    /// One pass of the loop.
    ///
    /// 1. Refresh if strictly more than the interval has passed since the last refresh, or
    ///    if a refresh is requested.
    /// 2. Then, if the brighter button is held, step up; otherwise if the dimmer button is
    ///    held, step down. Either way the debounce is slept.
    /// 3. Otherwise sleep the idle poll.
    ///
    /// # Errors
    ///
    /// Any refresh or render error.
    pub async fn step(&mut self) -> Result<Step> {
        let now = self.clock.now();
        let due = self.last_refresh.is_none_or(|last| {
            now.saturating_duration_since(last) > self.profile.refresh.interval
        });

        let mut step = Step::default();
        if due || self.inputs.refresh_requested() {
            self.refresh(true).await?;
            step.refreshed = true;
        }

        let change = if self.inputs.brightness_up() {
            Some(BrightnessChange::Up)
        } else if self.inputs.brightness_down() {
            Some(BrightnessChange::Down)
        } else {
            None
        };

        match change {
            Some(change) => self.adjust_brightness(change).await?,
            None => self.clock.sleep(self.profile.refresh.idle_poll).await,
        }
        step.brightness = change;
        Ok(step)
    }

    /// Moves brightness one step, redraws the cached calendar, flushes, and sleeps the
    /// debounce.
    ///
    /// # Errors
    ///
    /// Any render error.
    pub async fn adjust_brightness(&mut self, change: BrightnessChange) -> Result<()> {
        self.state = SchedulerState::AdjustingBrightness;
        match change {
            BrightnessChange::Up => self.profile.brightness.increase(),
            BrightnessChange::Down => self.profile.brightness.decrease(),
        };
        // Integers, so both log backends can print it.
        let per_mille = self.profile.brightness.per_mille();
        info!("brightness {}.{}%", per_mille / 10, per_mille % 10);

        self.redraw(Trace::Off)?;
        self.sink.flush(&self.frame).await;
        self.clock
            .sleep(self.profile.refresh.brightness_debounce)
            .await;
        self.state = SchedulerState::Idle;
        Ok(())
    }

    /// [`start`](Self::start), then [`step`](Self::step) forever.
    ///
    /// # Errors
    ///
    /// Returns only with the first fatal error.
    pub async fn run(&mut self) -> Result<Infallible> {
        self.start().await?;
        loop {
            self.step().await?;
        }
    }

    /// Logs `error`, shows the error screen, and stops for good.
    pub async fn halt(&mut self, error: Error) -> ! {
        self.state = SchedulerState::Halted;
        let (line1, line2) = error.short_message();
        let code = error.class().code();
        error!("halted: {} {} (class {})", line1, line2, code);

        let color = self.scaled(self.profile.error_color);
        self.profile
            .topology
            .draw_error(&mut self.frame, &error, color);
        self.sink.flush(&self.frame).await;

        let never: Infallible = core::future::pending().await;
        match never {}
    }

    fn redraw(&mut self, trace: Trace) -> Result<()> {
        render_into(
            &self.profile.topology,
            &self.calendar,
            &self.profile.color_scale,
            self.profile.brightness.level(),
            &mut self.frame,
            trace,
        )
    }

    fn scaled(&self, color: RGB8) -> RGB8 {
        self.profile.brightness.scale(color)
    }

    /// Current loop state.
    #[must_use]
    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    /// The brightness control.
    #[must_use]
    pub const fn brightness(&self) -> &BrightnessControl {
        &self.profile.brightness
    }

    /// The most recently fetched calendar (empty before the first fetch).
    #[must_use]
    pub const fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// The frame most recently flushed.
    #[must_use]
    pub const fn frame(&self) -> &T::Frame {
        &self.frame
    }

    /// When the last refresh finished.
    #[must_use]
    pub const fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    /// The board profile in use.
    #[must_use]
    pub const fn profile(&self) -> &BoardProfile<T> {
        &self.profile
    }

    /// The frame sink.
    #[must_use]
    pub const fn sink(&self) -> &F {
        &self.sink
    }

    /// The control inputs, for changing what they report.
    pub const fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }

    /// The contribution source.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The clock.
    pub const fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
