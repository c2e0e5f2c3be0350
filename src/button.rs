//! Level-sampled buttons and the [`ControlInputs`] they feed.
//!
//! The refresh loop samples buttons once per iteration and acts while a button is held; the
//! loop's own sleeps rate-limit repeats. So a button here is just a pin plus its wiring.
//!
//! ```rust
//! use contrib_glow::button::{Button, ButtonInputs, PressedTo};
//! use contrib_glow::refresh::ControlInputs;
//! # use core::convert::Infallible;
//! # struct Level(bool);
//! # impl embedded_hal::digital::ErrorType for Level { type Error = Infallible; }
//! # impl embedded_hal::digital::InputPin for Level {
//! #     fn is_high(&mut self) -> Result<bool, Infallible> { Ok(self.0) }
//! #     fn is_low(&mut self) -> Result<bool, Infallible> { Ok(!self.0) }
//! # }
//!
//! // Pimoroni Bling: A and B refresh, C brighter, D dimmer. Buttons pull the pin high.
//! let mut inputs = ButtonInputs::new(
//!     [
//!         Button::new(Level(false), PressedTo::Voltage),
//!         Button::new(Level(true), PressedTo::Voltage),
//!     ],
//!     Button::new(Level(false), PressedTo::Voltage),
//!     Button::new(Level(false), PressedTo::Voltage),
//! );
//! assert!(inputs.refresh_requested());
//! assert!(!inputs.brightness_up());
//! ```

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use crate::refresh::ControlInputs;

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed. Pin reads HIGH when pressed.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with pull-down resistors
    /// that can cause pins to stay HIGH after button release. Use `Ground` there.
    Voltage,

    /// Button connects pin to ground (GND) when pressed. Pin reads LOW when pressed.
    Ground,
}

/// One button on a GPIO input.
///
/// Any [`InputPin`] that cannot fail works, including `embassy_rp::gpio::Input`.
pub struct Button<P> {
    pin: P,
    pressed_to: PressedTo,
}

impl<P: InputPin<Error = Infallible>> Button<P> {
    /// Wraps an already configured input pin.
    #[must_use]
    pub const fn new(pin: P, pressed_to: PressedTo) -> Self {
        Self { pin, pressed_to }
    }

    /// Returns whether the button is currently pressed.
    pub fn is_pressed(&mut self) -> bool {
        let Ok(high) = self.pin.is_high();
        match self.pressed_to {
            PressedTo::Voltage => high,
            PressedTo::Ground => !high,
        }
    }

    /// How the button is wired.
    #[must_use]
    pub const fn pressed_to(&self) -> PressedTo {
        self.pressed_to
    }
}

/// Refresh, brighter and dimmer buttons as the refresh loop's [`ControlInputs`].
///
/// Any of the `R` refresh buttons requests a refresh.
pub struct ButtonInputs<P, const R: usize> {
    refresh: [Button<P>; R],
    up: Button<P>,
    down: Button<P>,
}

impl<P: InputPin<Error = Infallible>, const R: usize> ButtonInputs<P, R> {
    /// Groups the buttons.
    #[must_use]
    pub const fn new(refresh: [Button<P>; R], up: Button<P>, down: Button<P>) -> Self {
        Self { refresh, up, down }
    }
}

impl<P: InputPin<Error = Infallible>, const R: usize> ControlInputs for ButtonInputs<P, R> {
    fn refresh_requested(&mut self) -> bool {
        self.refresh.iter_mut().any(Button::is_pressed)
    }

    fn brightness_up(&mut self) -> bool {
        self.up.is_pressed()
    }

    fn brightness_down(&mut self) -> bool {
        self.down.is_pressed()
    }
}
