//! CYW43-mediated LED (Pico 2 W)
//!
//! On the Pico 2 W the LED is wired to WL_GPIO0 of the CYW43439 wireless
//! chip, so driving it needs the whole chip up: PIO-based SPI bus, firmware
//! download, driver task, CLM blob.
//!
//! # Bring-up Flow
//!
//! ```text
//! 1. Take power pin + PIO SPI bus (once)
//! 2. ┌ cyw43::new(): power up, load firmware
//!    │ Spawn the driver runner task
//!    │ Load CLM, enable power save
//!    └ all of it bounded by CYW43_INIT_TIMEOUT_MS
//! 3. LED writes go through Control::gpio_set
//! ```
//!
//! Any step failing, or the chip not answering in time, is reported as
//! `PlatformError::CapabilityInitFailure`.

use cyw43::{Control, PowerManagementMode};
use cyw43_pio::PioSpi;
use embassy_executor::Spawner;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::{DMA_CH0, PIO0};
use static_cell::StaticCell;

use super::EmbassyTimer;
use crate::config::{Banner, CYW43_INIT_TIMEOUT_MS, CYW43_LED_GPIO, PICO2_W_BANNER};
use crate::platform::deadline::init_within;
use crate::platform::{error::PlatformError, traits::LedCapability, Result};
use crate::{log_error, log_info};

/// SPI bus to the CYW43439 on the Pico 2 W
pub type Cyw43Spi = PioSpi<'static, PIO0, 0, DMA_CH0>;

/// LED behind the CYW43439 co-processor
pub struct Cyw43Led {
    spawner: Spawner,
    bus: Option<(Output<'static>, Cyw43Spi)>,
    control: Option<Control<'static>>,
}

impl Cyw43Led {
    /// Hold on to the chip's power pin and SPI bus until `init`
    ///
    /// # Arguments
    ///
    /// * `spawner` - Embassy spawner for the driver task
    /// * `pwr` - WL_ON power pin (GPIO23), initially low
    /// * `spi` - PIO SPI bus (GPIO24 data, GPIO29 clock, GPIO25 chip select)
    pub fn new(spawner: Spawner, pwr: Output<'static>, spi: Cyw43Spi) -> Self {
        Self {
            spawner,
            bus: Some((pwr, spi)),
            control: None,
        }
    }
}

impl LedCapability for Cyw43Led {
    fn name(&self) -> &'static str {
        "CYW43"
    }

    fn banner(&self) -> Banner {
        PICO2_W_BANNER
    }

    async fn init(&mut self) -> Result<()> {
        let (pwr, spi) = self.bus.take().ok_or(PlatformError::CapabilityInitFailure)?;

        let mut timer = EmbassyTimer::new();
        let control = init_within(
            &mut timer,
            CYW43_INIT_TIMEOUT_MS,
            bring_up(self.spawner, pwr, spi),
        )
        .await?;

        log_info!("CYW43 initialized");
        self.control = Some(control);
        Ok(())
    }

    async fn set_output(&mut self, on: bool) {
        if let Some(control) = self.control.as_mut() {
            control.gpio_set(CYW43_LED_GPIO, on).await;
        }
    }
}

/// Power up the chip, start its driver and load the CLM
///
/// Waits on the chip at every step; the caller bounds the whole sequence.
async fn bring_up(
    spawner: Spawner,
    pwr: Output<'static>,
    spi: Cyw43Spi,
) -> Result<Control<'static>> {
    let fw = include_bytes!("../../../cyw43-firmware/43439A0.bin");
    let clm = include_bytes!("../../../cyw43-firmware/43439A0_clm.bin");

    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE
        .try_init(cyw43::State::new())
        .ok_or(PlatformError::CapabilityInitFailure)?;

    let (_net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;

    let token = cyw43_task(runner).map_err(|_| {
        log_error!("Failed to spawn CYW43 driver task");
        PlatformError::CapabilityInitFailure
    })?;
    spawner.spawn(token);

    control.init(clm).await;
    control
        .set_power_management(PowerManagementMode::PowerSave)
        .await;

    Ok(control)
}

/// CYW43 driver task
///
/// Runs the CYW43439 driver event loop.
/// Must be spawned on the executor for `Control` calls to complete.
#[embassy_executor::task]
async fn cyw43_task(runner: cyw43::Runner<'static, Output<'static>, Cyw43Spi>) -> ! {
    runner.run().await
}
