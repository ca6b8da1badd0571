//! RP2350 platform implementation for Raspberry Pi Pico 2 / Pico 2 W
//!
//! This module provides concrete implementations of the platform abstraction
//! traits for the RP2350 microcontroller using the `embassy-rp` crate.
//!
//! # Feature Gate
//!
//! This module is only available when the `rp2350` feature is enabled
//! (implied by `pico2` and `pico2_w`):
//!
//! ```toml
//! [dependencies]
//! pico_blink = { version = "0.1", features = ["pico2_w"] }
//! ```

mod console;
mod gpio_led;
mod timer;

#[cfg(feature = "pico2_w")]
mod cyw43_led;

#[cfg(feature = "usb_serial")]
mod usb_console;

pub use console::RttConsole;
pub use gpio_led::GpioLed;
pub use timer::EmbassyTimer;

#[cfg(feature = "pico2_w")]
pub use cyw43_led::Cyw43Led;

#[cfg(feature = "usb_serial")]
pub use usb_console::{start_usb_console, UsbConsole};

use crate::log_error;
use crate::platform::PlatformError;

/// Terminate the firmware with the error's exit status
///
/// There is no process to return to on the MCU. The status is logged and
/// the core traps on a permanently undefined instruction, which the
/// probe-rs runner reports as an abnormal exit.
pub fn exit(err: PlatformError) -> ! {
    log_error!("Exiting with status {}: {}", err.exit_code(), err);
    cortex_m::asm::udf()
}
