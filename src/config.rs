//! Compile-time board configuration
//!
//! Nothing here is read at runtime: pin numbers, timing and console text are
//! fixed for each firmware image.

/// GPIO driving the onboard LED on the Pico 2
pub const LED_PIN: u8 = 25;

/// Name of the Pico 2 LED pin in console output
pub const LED_PIN_NAME: &str = "GPIO25";

/// Number of user GPIOs on the RP2350A package (GPIO0..=GPIO29)
pub const GPIO_COUNT: u8 = 30;

/// CYW43439 GPIO wired to the onboard LED on the Pico 2 W (WL_GPIO0)
pub const CYW43_LED_GPIO: u8 = 0;

/// How long the whole CYW43439 bring-up (power-up, firmware, driver task,
/// CLM, power management) may take before it counts as failed
pub const CYW43_INIT_TIMEOUT_MS: u32 = 5_000;

/// Duration of each LED phase (on, then off)
///
/// Two phases make one 1 Hz cycle.
pub const BLINK_INTERVAL_MS: u32 = 500;

/// Exit status reported when the LED capability cannot be brought up
pub const EXIT_FAILURE: i32 = -1;

/// Console line written when the LED is driven high
pub const LED_ON_LINE: &str = "LED ON";

/// Console line written when the LED is driven low
pub const LED_OFF_LINE: &str = "LED OFF";

/// Maximum length of a single console line
///
/// Longer lines are cut. With its "\r\n" a line fills at most one USB CDC
/// packet.
pub const CONSOLE_LINE_LEN: usize = 62;

/// Startup banner printed once the LED capability is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    /// Program title
    pub title: &'static str,
    /// What the program is about to do
    pub detail: &'static str,
}

impl Banner {
    /// Banner lines in output order
    pub const fn lines(&self) -> [&'static str; 2] {
        [self.title, self.detail]
    }
}

/// Pico 2 (direct GPIO) banner
pub const PICO2_BANNER: Banner = Banner {
    title: "Pico 2 Blink Example",
    detail: "LED blinking at 1Hz on GPIO25...",
};

/// Pico 2 W (CYW43) banner
pub const PICO2_W_BANNER: Banner = Banner {
    title: "Pico 2W Blink Example",
    detail: "LED blinking at 1Hz...",
};

/// USB CDC console descriptor settings
pub mod usb {
    /// Vendor ID (pid.codes test VID)
    pub const VID: u16 = 0x16c0;
    /// Product ID
    pub const PID: u16 = 0x27dd;
    pub const MANUFACTURER: &str = "Raspberry Pi";
    pub const PRODUCT: &str = "Pico 2 Blink";
    pub const SERIAL_NUMBER: &str = "00000001";
    /// Max packet size for the CDC-ACM bulk endpoints
    pub const MAX_PACKET_SIZE: u16 = 64;
    /// Lines buffered while no host is attached
    pub const CONSOLE_QUEUE_DEPTH: usize = 16;
}
