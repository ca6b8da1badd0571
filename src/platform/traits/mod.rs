//! Platform abstraction traits
//!
//! This module defines the traits that board implementations must provide.

pub mod console;
pub mod led;
pub mod timer;

// Re-export trait interfaces
pub use console::ConsoleInterface;
pub use led::LedCapability;
pub use timer::TimerInterface;
