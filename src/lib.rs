#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! pico_blink - LED blink firmware for Raspberry Pi Pico 2 / Pico 2 W
//!
//! One control flow drives both boards: the LED capability is either a
//! directly addressed GPIO (Pico 2, GPIO25) or a line on the CYW43439
//! co-processor (Pico 2 W). The board is chosen by Cargo feature.

// Compile-time board constants
pub mod config;

// Logging macros
pub mod core;

// Platform abstraction layer (traits, RP2350, mocks)
pub mod platform;

// Toggle loop controller
pub mod blink;

pub use blink::{AfterCycles, BlinkController, Blinker, Forever, LedState, StopCondition};
pub use platform::{PlatformError, Result};
