//! Mock console implementation for testing

use std::string::ToString;

use super::{Event, Journal, MockClock};
use crate::platform::traits::ConsoleInterface;

/// Mock console
///
/// Journals every line with the simulated time it was written.
#[derive(Debug, Clone)]
pub struct MockConsole {
    journal: Journal,
    clock: MockClock,
}

impl MockConsole {
    pub fn new(journal: Journal, clock: MockClock) -> Self {
        Self { journal, clock }
    }
}

impl ConsoleInterface for MockConsole {
    fn init(&mut self) {
        self.journal.record(Event::ConsoleInit);
    }

    fn write_line(&mut self, line: &str) {
        self.journal.record(Event::Line {
            at_ms: self.clock.now_ms(),
            text: line.to_string(),
        });
    }
}
