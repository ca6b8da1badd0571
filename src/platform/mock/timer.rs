//! Mock Timer implementation for testing

use super::{Event, Journal, MockClock};
use crate::platform::traits::TimerInterface;

/// Mock Timer implementation
///
/// Delays complete immediately and advance the shared simulated clock by
/// the requested amount.
#[derive(Debug, Clone)]
pub struct MockTimer {
    journal: Journal,
    clock: MockClock,
}

impl MockTimer {
    pub fn new(journal: Journal, clock: MockClock) -> Self {
        Self { journal, clock }
    }
}

impl TimerInterface for MockTimer {
    async fn delay_ms(&mut self, ms: u32) {
        self.journal.record(Event::Delay {
            at_ms: self.clock.now_ms(),
            ms,
        });
        self.clock.advance_us(u64::from(ms) * 1000);
    }

    fn now_us(&self) -> u64 {
        self.clock.now_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_mock_timer_delay_ms() {
        let clock = MockClock::new();
        let mut timer = MockTimer::new(Journal::new(), clock.clone());
        assert_eq!(timer.now_us(), 0);

        block_on(timer.delay_ms(1));
        assert_eq!(timer.now_us(), 1000);

        block_on(timer.delay_ms(500));
        assert_eq!(timer.now_ms(), 501);
        assert_eq!(clock.now_ms(), 501);
    }

    #[test]
    fn test_mock_timer_journals_delays() {
        let journal = Journal::new();
        let mut timer = MockTimer::new(journal.clone(), MockClock::new());

        block_on(timer.delay_ms(500));
        block_on(timer.delay_ms(500));

        assert_eq!(
            journal.events(),
            vec![
                Event::Delay { at_ms: 0, ms: 500 },
                Event::Delay { at_ms: 500, ms: 500 },
            ]
        );
    }
}
