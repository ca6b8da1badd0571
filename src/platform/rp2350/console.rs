//! RTT console
//!
//! Console lines go to the debug probe through defmt's RTT transport, next
//! to the log output. The binary must link `defmt_rtt`.

use crate::platform::traits::ConsoleInterface;

/// Console printing over RTT via `defmt::println!`
#[derive(Debug, Clone, Copy, Default)]
pub struct RttConsole;

impl RttConsole {
    pub const fn new() -> Self {
        Self
    }
}

impl ConsoleInterface for RttConsole {
    fn write_line(&mut self, line: &str) {
        defmt::println!("{=str}", line);
    }
}
