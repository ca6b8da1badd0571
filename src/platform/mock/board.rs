//! Shared clock and event journal for the mock platform

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use super::{MockConsole, MockLed, MockTimer};
use crate::config::{Banner, LED_PIN, PICO2_BANNER, PICO2_W_BANNER};

/// Something the firmware did, in program order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Console transport prepared
    ConsoleInit,
    /// LED capability initialization attempted
    LedInit,
    /// Console line written
    Line { at_ms: u64, text: String },
    /// LED line driven
    Level { at_ms: u64, high: bool },
    /// Delay requested
    Delay { at_ms: u64, ms: u32 },
}

/// Simulated time source shared between mocks
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now_us: Rc<Cell<u64>>,
}

impl MockClock {
    /// Creates a new clock starting at time 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock
    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get().wrapping_add(us));
    }

    pub fn now_us(&self) -> u64 {
        self.now_us.get()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_us.get() / 1000
    }
}

/// Ordered event log shared between mocks
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    /// Snapshot of all events so far
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

/// One simulated board: clock, journal, and factories for mocks bound to them
///
/// # Example
///
/// ```ignore
/// use pico_blink::platform::mock::{Event, MockBoard};
/// use pico_blink::platform::ConsoleInterface;
///
/// let board = MockBoard::new();
/// let mut console = board.console();
/// console.write_line("hello");
/// assert_eq!(board.lines(), vec!["hello"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockBoard {
    clock: MockClock,
    journal: Journal,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pico 2 LED on GPIO25
    pub fn direct_pin_led(&self) -> MockLed {
        self.gpio_led(LED_PIN)
    }

    /// Directly addressed LED on an arbitrary pin
    ///
    /// Pins outside the package fail `init` with a hardware fault.
    pub fn gpio_led(&self, pin: u8) -> MockLed {
        MockLed::gpio(pin, PICO2_BANNER, self.journal.clone(), self.clock.clone())
    }

    /// Pico 2 W LED behind the CYW43
    pub fn coprocessor_led(&self) -> MockLed {
        self.led("CYW43", PICO2_W_BANNER)
    }

    /// LED with an arbitrary name and banner
    pub fn led(&self, name: &'static str, banner: Banner) -> MockLed {
        MockLed::new(name, banner, self.journal.clone(), self.clock.clone())
    }

    pub fn console(&self) -> MockConsole {
        MockConsole::new(self.journal.clone(), self.clock.clone())
    }

    pub fn timer(&self) -> MockTimer {
        MockTimer::new(self.journal.clone(), self.clock.clone())
    }

    pub fn events(&self) -> Vec<Event> {
        self.journal.events()
    }

    /// Console lines in output order
    pub fn lines(&self) -> Vec<String> {
        self.journal
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Line { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    /// LED levels in the order they were driven
    pub fn levels(&self) -> Vec<bool> {
        self.journal
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Level { high, .. } => Some(high),
                _ => None,
            })
            .collect()
    }

    /// Requested delays in milliseconds
    pub fn delays(&self) -> Vec<u32> {
        self.journal
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Delay { ms, .. } => Some(ms),
                _ => None,
            })
            .collect()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_clones_share_time() {
        let clock = MockClock::new();
        let other = clock.clone();
        other.advance_us(1500);
        assert_eq!(clock.now_us(), 1500);
        assert_eq!(clock.now_ms(), 1);
    }

    #[test]
    fn test_journal_keeps_order() {
        let journal = Journal::new();
        journal.record(Event::ConsoleInit);
        journal.clone().record(Event::LedInit);
        assert_eq!(journal.events(), vec![Event::ConsoleInit, Event::LedInit]);
    }

    #[test]
    fn test_fresh_board_is_empty() {
        let board = MockBoard::new();
        assert!(board.events().is_empty());
        assert_eq!(board.now_ms(), 0);
    }
}
