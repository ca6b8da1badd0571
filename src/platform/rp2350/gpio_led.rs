//! Direct GPIO LED (Pico 2)
//!
//! The LED hangs off GPIO25, so bring-up is just configuring the pin as an
//! output. It cannot fail once the pin type-checks.

use embassy_rp::gpio::{Flex, Level};
use embassy_rp::peripherals::PIN_25;
use embassy_rp::Peri;

use crate::config::{Banner, LED_PIN_NAME, PICO2_BANNER};
use crate::log_debug;
use crate::platform::{traits::LedCapability, Result};

/// LED driven directly from the Pico 2's GPIO25
///
/// Holds the pin as a [`Flex`] so that `init` is what switches it to an
/// output, matching the "initialize, then set direction" bring-up.
pub struct GpioLed<'d> {
    pin: Flex<'d>,
}

impl<'d> GpioLed<'d> {
    /// Take the LED pin; it stays unconfigured until `init`
    pub fn new(pin: Peri<'d, PIN_25>) -> Self {
        Self { pin: Flex::new(pin) }
    }
}

impl LedCapability for GpioLed<'_> {
    fn name(&self) -> &'static str {
        LED_PIN_NAME
    }

    fn banner(&self) -> Banner {
        PICO2_BANNER
    }

    async fn init(&mut self) -> Result<()> {
        self.pin.set_low();
        self.pin.set_as_output();
        log_debug!("GPIO LED configured as push-pull output");
        Ok(())
    }

    async fn set_output(&mut self, on: bool) {
        self.pin.set_level(Level::from(on));
    }
}
