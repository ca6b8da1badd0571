//! Mock LED capability for testing

use std::boxed::Box;
use std::format;

use super::{Event, Journal, MockClock};
use crate::config::{Banner, GPIO_COUNT};
use crate::platform::{
    error::{HardwareFault, PlatformError},
    traits::LedCapability,
    Result,
};

/// Mock LED capability
///
/// Stands in for either board variant. Tracks the driven level and whether
/// `init` ran, and can be told to fail initialization.
#[derive(Debug)]
pub struct MockLed {
    name: &'static str,
    banner: Banner,
    pin: Option<u8>,
    init_error: Option<PlatformError>,
    initialized: bool,
    level: bool,
    journal: Journal,
    clock: MockClock,
}

impl MockLed {
    /// LED whose `init` succeeds unless told otherwise
    pub fn new(name: &'static str, banner: Banner, journal: Journal, clock: MockClock) -> Self {
        Self {
            name,
            banner,
            pin: None,
            init_error: None,
            initialized: false,
            level: false,
            journal,
            clock,
        }
    }

    /// Directly addressed LED; `init` validates the pin number
    pub fn gpio(pin: u8, banner: Banner, journal: Journal, clock: MockClock) -> Self {
        // Names must be 'static to match the hardware implementations
        let name: &'static str = Box::leak(format!("GPIO{}", pin).into_boxed_str());
        Self {
            pin: Some(pin),
            ..Self::new(name, banner, journal, clock)
        }
    }

    /// Make `init` fail with `err`
    pub fn fail_init_with(mut self, err: PlatformError) -> Self {
        self.init_error = Some(err);
        self
    }

    /// Current driven level
    pub fn level(&self) -> bool {
        self.level
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl LedCapability for MockLed {
    fn name(&self) -> &'static str {
        self.name
    }

    fn banner(&self) -> Banner {
        self.banner
    }

    async fn init(&mut self) -> Result<()> {
        self.journal.record(Event::LedInit);

        if let Some(err) = self.init_error {
            return Err(err);
        }
        if let Some(pin) = self.pin {
            if pin >= GPIO_COUNT {
                return Err(HardwareFault::InvalidPin(pin).into());
            }
        }

        self.initialized = true;
        Ok(())
    }

    async fn set_output(&mut self, on: bool) {
        self.level = on;
        self.journal.record(Event::Level {
            at_ms: self.clock.now_ms(),
            high: on,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PICO2_BANNER;
    use embassy_futures::block_on;

    fn led(pin: u8) -> (MockLed, Journal) {
        let journal = Journal::new();
        let led = MockLed::gpio(pin, PICO2_BANNER, journal.clone(), MockClock::new());
        (led, journal)
    }

    #[test]
    fn test_mock_led_output() {
        let (mut led, journal) = led(25);
        block_on(led.init()).unwrap();
        assert!(led.is_initialized());
        assert!(!led.level());

        block_on(led.set_output(true));
        assert!(led.level());

        block_on(led.set_output(false));
        assert!(!led.level());

        assert_eq!(
            journal.events(),
            vec![
                Event::LedInit,
                Event::Level { at_ms: 0, high: true },
                Event::Level { at_ms: 0, high: false },
            ]
        );
    }

    #[test]
    fn test_mock_led_invalid_pin() {
        let (mut led, _) = led(30);
        assert_eq!(led.name(), "GPIO30");
        assert_eq!(
            block_on(led.init()),
            Err(PlatformError::HardwareFault(HardwareFault::InvalidPin(30)))
        );
        assert!(!led.is_initialized());
    }

    #[test]
    fn test_mock_led_forced_failure() {
        let (led, _) = led(25);
        let mut led = led.fail_init_with(PlatformError::CapabilityInitFailure);
        assert_eq!(
            block_on(led.init()),
            Err(PlatformError::CapabilityInitFailure)
        );
    }
}
