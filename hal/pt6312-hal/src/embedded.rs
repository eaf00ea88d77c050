//! Adapters for `embedded-hal` 1.0 pins
//!
//! The bus has no way to report a failed pin write, so only pins whose
//! error type is [`Infallible`] can be adapted.

use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{FlexPin, InputPin, OutputPin};

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Push-pull output pin (strobe, clock)
pub struct PushPull<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin<Error = Infallible>> PushPull<P> {
    /// Wrap a pin, driving it to `initial_high`
    pub fn new(mut pin: P, initial_high: bool) -> Self {
        if initial_high {
            infallible(pin.set_high());
        } else {
            infallible(pin.set_low());
        }
        Self {
            pin,
            high: initial_high,
        }
    }

    /// Unwrap the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: digital::OutputPin<Error = Infallible>> OutputPin for PushPull<P> {
    fn set_high(&mut self) {
        infallible(self.pin.set_high());
        self.high = true;
    }

    fn set_low(&mut self) {
        infallible(self.pin.set_low());
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Open-drain data line with an external (or enabled internal) pull-up
///
/// `embedded-hal` has no portable direction switch, so the line is never
/// turned around: input mode releases it high and lets the controller
/// pull it low.
pub struct OpenDrain<P> {
    pin: P,
    high: bool,
}

impl<P> OpenDrain<P>
where
    P: digital::OutputPin<Error = Infallible> + digital::InputPin<Error = Infallible>,
{
    /// Wrap a pin, releasing the line
    pub fn new(mut pin: P) -> Self {
        infallible(pin.set_high());
        Self { pin, high: true }
    }

    /// Unwrap the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for OpenDrain<P>
where
    P: digital::OutputPin<Error = Infallible> + digital::InputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        infallible(self.pin.set_high());
        self.high = true;
    }

    fn set_low(&mut self) {
        infallible(self.pin.set_low());
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl<P> InputPin for OpenDrain<P>
where
    P: digital::OutputPin<Error = Infallible> + digital::InputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        infallible(self.pin.is_high())
    }
}

impl<P> FlexPin for OpenDrain<P>
where
    P: digital::OutputPin<Error = Infallible> + digital::InputPin<Error = Infallible>,
{
    fn set_as_input(&mut self) {
        self.set_high();
    }

    fn set_as_output(&mut self) {}
}
