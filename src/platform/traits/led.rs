//! LED capability trait
//!
//! The single seam between the blink loop and the board. A Pico 2 drives
//! the LED from an RP2350 GPIO; a Pico 2 W has to go through the CYW43439,
//! which must be booted first and can fail to come up.

use crate::config::Banner;
use crate::platform::Result;

/// Digital output capability driving the onboard LED
///
/// # Invariants
///
/// - `init` is called exactly once, before any `set_output`
/// - The implementation is exclusively owned by one control flow
#[allow(async_fn_in_trait)]
pub trait LedCapability {
    /// Short name of what backs the LED, used in the init failure line
    /// (`"Failed to initialize <name>"`)
    fn name(&self) -> &'static str;

    /// Banner printed once initialization succeeded
    fn banner(&self) -> Banner;

    /// Bring up the output line
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::CapabilityInitFailure` if the co-processor
    /// owning the line does not come up, or `PlatformError::HardwareFault`
    /// for an unusable pin.
    async fn init(&mut self) -> Result<()>;

    /// Drive the LED line high (`true`) or low (`false`)
    async fn set_output(&mut self, on: bool);
}
