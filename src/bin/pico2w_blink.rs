//! Pico 2 W blink firmware
//!
//! Boots the CYW43439 wireless chip, which owns the onboard LED, then blinks
//! it at 1 Hz and prints each transition to the console. If the chip does
//! not come up the firmware prints `Failed to initialize CYW43` and exits
//! with status -1.
//!
//! # Hardware
//!
//! Raspberry Pi Pico 2 W (RP2350 + CYW43439) - LED on CYW43 WL_GPIO0
//!
//! # Usage
//!
//! ```bash
//! # cyw43-firmware/ must contain 43439A0.bin and 43439A0_clm.bin
//! cargo run --release --target thumbv8m.main-none-eabihf --features pico2_w --bin pico2w_blink
//! ```

#![no_std]
#![no_main]

use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use pico_blink::platform::rp2350::{self, Cyw43Led, EmbassyTimer};
use pico_blink::BlinkController;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct PioIrqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

#[cfg(feature = "usb_serial")]
bind_interrupts!(struct UsbIrqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<embassy_rp::peripherals::USB>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    #[cfg(feature = "usb_serial")]
    let console =
        rp2350::start_usb_console(spawner, embassy_rp::usb::Driver::new(p.USB, UsbIrqs));
    #[cfg(not(feature = "usb_serial"))]
    let console = rp2350::RttConsole::new();

    // CYW43439 bus: WL_ON on GPIO23, PIO SPI data on GPIO24, clock on GPIO29,
    // chip select on GPIO25
    let pwr = Output::new(p.PIN_23, Level::Low);
    let cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, PioIrqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    let led = Cyw43Led::new(spawner, pwr, spi);

    let controller = BlinkController::new(led, console, EmbassyTimer::new());
    match controller.run().await {
        Ok(never) => match never {},
        Err(err) => rp2350::exit(err),
    }
}
