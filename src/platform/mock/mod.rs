//! Mock platform implementation for testing
//!
//! Host implementations of the platform traits. Every observable effect
//! (console lines, LED level changes, delays) is appended to a shared
//! journal and stamped with a simulated clock that only moves when a mock
//! delay runs, so tests see exactly what the firmware would emit and when.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use pico_blink::platform::mock::MockBoard;
//! use pico_blink::{AfterCycles, BlinkController};
//!
//! let board = MockBoard::new();
//! let controller = BlinkController::new(board.direct_pin_led(), board.console(), board.timer());
//! let _ = controller.run_until(AfterCycles(1));
//! ```

#![cfg(any(test, feature = "mock"))]

mod board;
mod console;
mod led;
mod timer;

pub use board::{Event, Journal, MockBoard, MockClock};
pub use console::MockConsole;
pub use led::MockLed;
pub use timer::MockTimer;
