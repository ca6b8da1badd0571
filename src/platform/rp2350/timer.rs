//! RP2350 Timer implementation
//!
//! This module provides timer and delay support for RP2350 using the
//! `embassy-time` driver.

use embassy_time::{Instant, Timer};

use crate::platform::traits::TimerInterface;

/// Embassy-based timer
///
/// Delays suspend the calling task on the embassy time driver; the RP2350
/// timer behind it is a 64-bit microsecond counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTimer;

impl EmbassyTimer {
    pub const fn new() -> Self {
        Self
    }
}

impl TimerInterface for EmbassyTimer {
    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(u64::from(ms)).await;
    }

    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
