//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

use crate::config::EXIT_FAILURE;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// Only LED capability bring-up can fail; everything after it (pin writes,
/// delays, console lines) is infallible at this level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum PlatformError {
    /// The co-processor that owns the LED line could not be brought up
    CapabilityInitFailure,
    /// Unrecoverable lower-level hardware condition
    HardwareFault(HardwareFault),
}

/// Lower-level hardware faults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum HardwareFault {
    /// Pin number does not exist on this package
    InvalidPin(u8),
}

impl PlatformError {
    /// Exit status the firmware terminates with for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            PlatformError::CapabilityInitFailure | PlatformError::HardwareFault(_) => EXIT_FAILURE,
        }
    }
}

impl From<HardwareFault> for PlatformError {
    fn from(fault: HardwareFault) -> Self {
        PlatformError::HardwareFault(fault)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::CapabilityInitFailure => write!(f, "LED capability initialization failed"),
            PlatformError::HardwareFault(e) => write!(f, "Hardware fault: {}", e),
        }
    }
}

impl fmt::Display for HardwareFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareFault::InvalidPin(pin) => write!(f, "invalid pin GPIO{}", pin),
        }
    }
}
