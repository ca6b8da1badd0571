//! Timer interface trait
//!
//! This module defines the delay and time source used by the blink loop.

/// Timer interface trait
///
/// Delays block the calling task for a fixed wall-clock duration; nothing
/// else runs on its behalf in the meantime.
#[allow(async_fn_in_trait)]
pub trait TimerInterface {
    /// Wait for `ms` milliseconds
    async fn delay_ms(&mut self, ms: u32);

    /// Microseconds since boot
    fn now_us(&self) -> u64;

    /// Milliseconds since boot
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
