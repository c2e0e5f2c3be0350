//! Bindings from the refresh loop's collaborators to RP2040/RP2350 peripherals.
//!
//! - [`EmbassyClock`]: `embassy-time` as the loop's [`Clock`].
//! - [`button`]: a GPIO pin configured for its wiring, as a [`Button`].
//! - [`Ws2812StripSink`] and [`Ws2812PanelSink`]: a PIO WS2812 driver as the loop's
//!   [`FrameSink`], with the current limit applied on the way out.

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::{PioWs2812, RgbColorOrder};
use embassy_time::{Duration, Instant, Timer};

use crate::button::{Button, PressedTo};
use crate::frame::{Frame1d, Frame2d, PanelWiring};
use crate::power::{Current, MA_PER_PIXEL, apply_limit, limit_table};
use crate::refresh::{Clock, FrameSink};

/// The `embassy-time` driver as a [`Clock`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&mut self, duration: Duration) {
        Timer::after(duration).await;
    }
}

/// Configures `pin` as an input with the pull matching `pressed_to`.
///
/// - [`PressedTo::Voltage`]: Uses internal pull-down (button to 3.3V)
/// - [`PressedTo::Ground`]: Uses internal pull-up (button to GND)
#[must_use]
pub fn button<'d, P: Pin>(pin: Peri<'d, P>, pressed_to: PressedTo) -> Button<Input<'d>> {
    let pull = match pressed_to {
        PressedTo::Voltage => Pull::Down,
        PressedTo::Ground => Pull::Up,
    };
    Button::new(Input::new(pin, pull), pressed_to)
}

/// A WS2812 strip of `N` pixels on one PIO state machine.
pub struct Ws2812StripSink<'d, P: Instance, const S: usize, const N: usize, ORDER>
where
    ORDER: RgbColorOrder,
{
    driver: PioWs2812<'d, P, S, N, ORDER>,
    limit: [u8; 256],
}

impl<'d, P: Instance, const S: usize, const N: usize, ORDER> Ws2812StripSink<'d, P, S, N, ORDER>
where
    ORDER: RgbColorOrder,
{
    /// Wraps `driver`, capping channels so that `N` white pixels stay within `max_current`.
    #[must_use]
    pub fn new(driver: PioWs2812<'d, P, S, N, ORDER>, max_current: Current) -> Self {
        let max_brightness = max_current.max_brightness(N as u32 * MA_PER_PIXEL);
        info!("strip of {} pixels, channel cap {}", N, max_brightness);
        Self {
            driver,
            limit: limit_table(max_brightness),
        }
    }
}

impl<P: Instance, const S: usize, const N: usize, ORDER> FrameSink<Frame1d<N>>
    for Ws2812StripSink<'_, P, S, N, ORDER>
where
    ORDER: RgbColorOrder,
{
    async fn flush(&mut self, frame: &Frame1d<N>) {
        let mut pixels = *frame;
        apply_limit(pixels.as_mut_slice(), &self.limit);
        self.driver.write(&pixels).await;
    }
}

/// A `W × H` WS2812 panel wired as one chain of `N = W * H` pixels.
pub struct Ws2812PanelSink<
    'd,
    P: Instance,
    const S: usize,
    const W: usize,
    const H: usize,
    const N: usize,
    ORDER,
> where
    ORDER: RgbColorOrder,
{
    strip: Ws2812StripSink<'d, P, S, N, ORDER>,
    wiring: PanelWiring,
}

impl<'d, P: Instance, const S: usize, const W: usize, const H: usize, const N: usize, ORDER>
    Ws2812PanelSink<'d, P, S, W, H, N, ORDER>
where
    ORDER: RgbColorOrder,
{
    /// Wraps `driver` for a panel whose chain follows `wiring`.
    #[must_use]
    pub fn new(
        driver: PioWs2812<'d, P, S, N, ORDER>,
        wiring: PanelWiring,
        max_current: Current,
    ) -> Self {
        Self {
            strip: Ws2812StripSink::new(driver, max_current),
            wiring,
        }
    }
}

impl<P: Instance, const S: usize, const W: usize, const H: usize, const N: usize, ORDER>
    FrameSink<Frame2d<W, H>> for Ws2812PanelSink<'_, P, S, W, H, N, ORDER>
where
    ORDER: RgbColorOrder,
{
    async fn flush(&mut self, frame: &Frame2d<W, H>) {
        let strip = frame.to_strip::<N>(self.wiring);
        self.strip.flush(&strip).await;
    }
}
