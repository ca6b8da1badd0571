//! Platform abstraction layer
//!
//! Board-specific code lives here. The blink controller only sees the traits
//! in [`traits`]; [`rp2350`] implements them on embassy-rp and [`mock`] on
//! the host.

pub mod deadline;
pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "rp2350")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{HardwareFault, PlatformError, Result};
pub use traits::{ConsoleInterface, LedCapability, TimerInterface};
