//! Pico 2 blink firmware
//!
//! Blinks the onboard LED on GPIO25 at 1 Hz and prints each transition to
//! the console.
//!
//! # Hardware
//!
//! Raspberry Pi Pico 2 (RP2350) - LED on GPIO25
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --target thumbv8m.main-none-eabihf --features pico2 --bin pico2_blink
//! # Console over USB serial instead of RTT:
//! cargo run --release --target thumbv8m.main-none-eabihf --features pico2,usb_serial --bin pico2_blink
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use pico_blink::platform::rp2350::{self, EmbassyTimer, GpioLed};
use pico_blink::BlinkController;
use {defmt_rtt as _, panic_probe as _};

#[cfg(feature = "usb_serial")]
embassy_rp::bind_interrupts!(struct UsbIrqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<embassy_rp::peripherals::USB>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    #[cfg(feature = "usb_serial")]
    let console =
        rp2350::start_usb_console(_spawner, embassy_rp::usb::Driver::new(p.USB, UsbIrqs));
    #[cfg(not(feature = "usb_serial"))]
    let console = rp2350::RttConsole::new();

    let led = GpioLed::new(p.PIN_25);

    let controller = BlinkController::new(led, console, EmbassyTimer::new());
    match controller.run().await {
        Ok(never) => match never {},
        Err(err) => rp2350::exit(err),
    }
}
