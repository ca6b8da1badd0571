//! USB CDC-ACM console
//!
//! Console lines are queued on a channel and written to a USB serial port by
//! a dedicated task, so `write_line` never waits on the host. Lines written
//! while the queue is full are dropped.

use embassy_executor::Spawner;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::{Builder, UsbDevice};
use static_cell::StaticCell;

use crate::config::usb;
use crate::core::console_line::{enqueue_line, frame_line, ConsoleLine};
use crate::platform::traits::ConsoleInterface;
use crate::{log_debug, log_warn};

/// Global console channel
static CONSOLE_CHANNEL: Channel<CriticalSectionRawMutex, ConsoleLine, { usb::CONSOLE_QUEUE_DEPTH }> =
    Channel::new();

/// Console writing to the USB serial port
#[derive(Debug, Clone, Copy)]
pub struct UsbConsole {
    _private: (),
}

impl ConsoleInterface for UsbConsole {
    fn write_line(&mut self, line: &str) {
        // Non-blocking; a detached host must not stall the blink loop
        if !enqueue_line(&CONSOLE_CHANNEL, line) {
            log_debug!("USB console queue full, line dropped");
        }
    }
}

/// Build the USB CDC-ACM device and spawn its tasks
///
/// # Arguments
///
/// * `spawner` - Embassy spawner for the USB device and console tasks
/// * `driver` - RP2350 USB driver with `USBCTRL_IRQ` bound
///
/// Must be called at most once. If a task cannot be spawned the console is
/// still returned; its lines are then dropped.
pub fn start_usb_console(spawner: Spawner, driver: Driver<'static, USB>) -> UsbConsole {
    let mut config = embassy_usb::Config::new(usb::VID, usb::PID);
    config.manufacturer = Some(usb::MANUFACTURER);
    config.product = Some(usb::PRODUCT);
    config.serial_number = Some(usb::SERIAL_NUMBER);
    config.max_power = 100;
    config.max_packet_size_0 = 64;

    // Required for Windows support
    config.device_class = 0xEF;
    config.device_sub_class = 0x02;
    config.device_protocol = 0x01;
    config.composite_with_iads = true;

    static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
    static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
    static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
    static SERIAL_STATE: StaticCell<State> = StaticCell::new();

    let mut builder = Builder::new(
        driver,
        config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        &mut [], // msos_descriptor
        CONTROL_BUF.init([0; 64]),
    );
    let class = CdcAcmClass::new(&mut builder, SERIAL_STATE.init(State::new()), usb::MAX_PACKET_SIZE);
    let device = builder.build();

    match usb_task(device) {
        Ok(token) => spawner.spawn(token),
        Err(_) => log_warn!("Failed to spawn USB device task"),
    }
    match usb_console_task(class) {
        Ok(token) => spawner.spawn(token),
        Err(_) => log_warn!("Failed to spawn USB console task"),
    }

    UsbConsole { _private: () }
}

#[embassy_executor::task]
async fn usb_task(mut device: UsbDevice<'static, Driver<'static, USB>>) -> ! {
    device.run().await
}

/// USB console writer task
///
/// Waits for a host to open the port, then drains the console channel.
/// Lines queued while no host is attached are kept until the queue fills.
#[embassy_executor::task]
async fn usb_console_task(mut class: CdcAcmClass<'static, Driver<'static, USB>>) -> ! {
    loop {
        class.wait_connection().await;
        log_debug!("USB console connected");

        loop {
            let line = CONSOLE_CHANNEL.receive().await;
            let wire = frame_line(&line);

            if class.write_packet(wire.as_bytes()).await.is_err() {
                log_debug!("USB console disconnected");
                break;
            }
        }
    }
}
