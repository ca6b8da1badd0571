//! Toggle loop controller
//!
//! Brings up the console and the LED capability, prints the banner, then
//! alternates the LED forever:
//!
//! ```text
//! console.init()
//! led.init()  ── Err ──> "Failed to initialize <name>", return Err
//!   │                    (hardware faults are only logged)
//!   │ Ok
//! banner (2 lines)
//! loop {
//!     "LED ON"  -> high -> wait 500 ms
//!     "LED OFF" -> low  -> wait 500 ms
//! }
//! ```
//!
//! The capability is initialized exactly once: [`BlinkController::start`]
//! consumes the controller and hands back a [`Blinker`], which is the only
//! type able to toggle the LED.
//!
//! The loop has no exit, so there is no teardown path for the capability;
//! `run` returning `Result<Infallible, _>` makes that explicit. Tests stop
//! the loop through [`StopCondition`].
//!
//! # Example
//!
//! ```ignore
//! let controller = BlinkController::new(led, console, timer);
//! match controller.run().await {
//!     Ok(never) => match never {},
//!     Err(err) => halt(err),
//! }
//! ```

use core::convert::Infallible;

use crate::config::{BLINK_INTERVAL_MS, LED_OFF_LINE, LED_ON_LINE};
use crate::core::console_line::{push_truncated, ConsoleLine};
use crate::platform::{ConsoleInterface, LedCapability, PlatformError, Result, TimerInterface};
use crate::{log_debug, log_error, log_info, log_trace};

/// Drive level of the LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum LedState {
    /// Low; the state before the first toggle
    #[default]
    Off,
    /// High
    On,
}

impl LedState {
    /// `true` when the line is driven high
    pub const fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }

    /// Console line announcing a switch into this state
    pub const fn console_line(self) -> &'static str {
        match self {
            LedState::On => LED_ON_LINE,
            LedState::Off => LED_OFF_LINE,
        }
    }
}

/// Decides whether the blink loop keeps going
///
/// Checked before every cycle with the number of cycles completed so far.
/// Firmware uses [`Forever`]; the other implementations exist so tests can
/// observe a bounded prefix of the infinite sequence.
pub trait StopCondition {
    /// `true` to stop before starting another cycle
    fn should_stop(&mut self, completed_cycles: u32) -> bool;
}

/// Never stops
#[derive(Debug, Clone, Copy, Default)]
pub struct Forever;

impl StopCondition for Forever {
    fn should_stop(&mut self, _completed_cycles: u32) -> bool {
        false
    }
}

/// Stops once the given number of cycles completed
#[derive(Debug, Clone, Copy)]
pub struct AfterCycles(pub u32);

impl StopCondition for AfterCycles {
    fn should_stop(&mut self, completed_cycles: u32) -> bool {
        completed_cycles >= self.0
    }
}

impl<F: FnMut(u32) -> bool> StopCondition for F {
    fn should_stop(&mut self, completed_cycles: u32) -> bool {
        self(completed_cycles)
    }
}

/// Blink controller before initialization
pub struct BlinkController<L, C, T> {
    led: L,
    console: C,
    timer: T,
}

impl<L, C, T> BlinkController<L, C, T>
where
    L: LedCapability,
    C: ConsoleInterface,
    T: TimerInterface,
{
    /// Create a controller; no hardware is touched until [`start`](Self::start)
    pub fn new(led: L, console: C, timer: T) -> Self {
        Self {
            led,
            console,
            timer,
        }
    }

    /// Initialize console and LED capability, then print the banner
    ///
    /// # Errors
    ///
    /// Returns the capability's init error. A
    /// [`CapabilityInitFailure`](PlatformError::CapabilityInitFailure) is
    /// also reported on the console as `"Failed to initialize <name>"`, cut
    /// to one console line; a hardware fault only goes to the log. No banner
    /// is printed and the LED is never driven.
    pub async fn start(mut self) -> Result<Blinker<L, C, T>> {
        self.console.init();

        let name = self.led.name();
        log_debug!("Initializing LED capability {}", name);

        if let Err(err) = self.led.init().await {
            if err == PlatformError::CapabilityInitFailure {
                let mut line = ConsoleLine::new();
                // Long names are cut, never dropped
                if push_truncated(&mut line, "Failed to initialize ") {
                    push_truncated(&mut line, name);
                }
                self.console.write_line(&line);
            }
            log_error!("{} init failed: {}", name, err);
            return Err(err);
        }

        for line in self.led.banner().lines() {
            self.console.write_line(line);
        }
        log_info!("{} ready, blinking every {} ms", name, BLINK_INTERVAL_MS);

        Ok(Blinker {
            led: self.led,
            console: self.console,
            timer: self.timer,
            state: LedState::Off,
            cycles: 0,
        })
    }

    /// Initialize and blink forever
    ///
    /// Only returns if initialization fails.
    pub async fn run(self) -> Result<Infallible> {
        let mut blinker = self.start().await?;
        loop {
            blinker.cycle().await;
        }
    }

    /// Initialize and blink until `stop` says otherwise
    ///
    /// With [`Forever`] this behaves exactly like [`run`](Self::run).
    /// Returns the number of completed cycles.
    pub async fn run_until<S: StopCondition>(self, stop: S) -> Result<u32> {
        let mut blinker = self.start().await?;
        Ok(blinker.blink_until(stop).await)
    }
}

/// Running blink loop with an initialized LED capability
pub struct Blinker<L, C, T> {
    led: L,
    console: C,
    timer: T,
    state: LedState,
    cycles: u32,
}

impl<L, C, T> Blinker<L, C, T>
where
    L: LedCapability,
    C: ConsoleInterface,
    T: TimerInterface,
{
    /// One full cycle: on phase, then off phase
    pub async fn cycle(&mut self) {
        self.phase(LedState::On).await;
        self.phase(LedState::Off).await;
        self.cycles = self.cycles.wrapping_add(1);
    }

    /// Run cycles until `stop` returns true
    ///
    /// Returns the number of cycles completed since start.
    pub async fn blink_until<S: StopCondition>(&mut self, mut stop: S) -> u32 {
        while !stop.should_stop(self.cycles) {
            self.cycle().await;
        }
        log_debug!("Blink loop stopped after {} cycles", self.cycles);
        self.cycles
    }

    /// Current LED drive level
    pub fn state(&self) -> LedState {
        self.state
    }

    /// Completed cycles since start (wraps)
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    async fn phase(&mut self, state: LedState) {
        self.console.write_line(state.console_line());
        self.led.set_output(state.is_on()).await;
        self.state = state;
        log_trace!("LED {} at {} ms", state.is_on(), self.timer.now_ms());
        self.timer.delay_ms(BLINK_INTERVAL_MS).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONSOLE_LINE_LEN, PICO2_BANNER, PICO2_W_BANNER};
    use crate::platform::mock::{Event, MockBoard};
    use embassy_futures::block_on;

    fn phase_lines(cycles: usize) -> Vec<&'static str> {
        [LED_ON_LINE, LED_OFF_LINE].repeat(cycles)
    }

    #[test]
    fn test_led_state_default_off() {
        assert_eq!(LedState::default(), LedState::Off);
        assert!(!LedState::Off.is_on());
        assert!(LedState::On.is_on());
        assert_eq!(LedState::On.console_line(), LED_ON_LINE);
    }

    #[test]
    fn test_direct_pin_banner_before_phase_lines() {
        let board = MockBoard::new();
        let controller =
            BlinkController::new(board.direct_pin_led(), board.console(), board.timer());

        let cycles = block_on(controller.run_until(AfterCycles(3))).unwrap();
        assert_eq!(cycles, 3);

        let lines = board.lines();
        assert_eq!(lines[0], PICO2_BANNER.title);
        assert_eq!(lines[1], PICO2_BANNER.detail);
        assert_eq!(lines[2..], phase_lines(3)[..]);
        assert_eq!(lines.iter().filter(|l| *l == PICO2_BANNER.title).count(), 1);
        assert_eq!(lines.iter().filter(|l| *l == PICO2_BANNER.detail).count(), 1);
    }

    #[test]
    fn test_phase_lines_repeat_without_gaps() {
        for n in [1usize, 2, 7, 25] {
            let board = MockBoard::new();
            let controller =
                BlinkController::new(board.direct_pin_led(), board.console(), board.timer());
            block_on(controller.run_until(AfterCycles(n as u32))).unwrap();

            assert_eq!(board.lines()[2..], phase_lines(n)[..]);
            assert_eq!(board.levels(), [true, false].repeat(n));
        }
    }

    #[test]
    fn test_each_phase_pauses_for_interval() {
        let board = MockBoard::new();
        let controller =
            BlinkController::new(board.direct_pin_led(), board.console(), board.timer());
        block_on(controller.run_until(AfterCycles(4))).unwrap();

        // Every phase line must be followed by its own level change at the
        // same instant, and the next level change one interval later.
        let events = board.events();
        let mut last_line_at = None;
        let mut checked = 0;
        for event in &events {
            match event {
                Event::Line { at_ms, text } if text == LED_ON_LINE || text == LED_OFF_LINE => {
                    last_line_at = Some(*at_ms);
                }
                Event::Level { at_ms, .. } => {
                    let line_at = last_line_at.expect("level change before any phase line");
                    assert_eq!(*at_ms, line_at);
                    checked += 1;
                }
                _ => {}
            }
        }
        assert_eq!(checked, 8);

        let level_times: Vec<u64> = events
            .iter()
            .filter_map(|e| match e {
                Event::Level { at_ms, .. } => Some(*at_ms),
                _ => None,
            })
            .collect();
        for pair in level_times.windows(2) {
            assert_eq!(pair[1] - pair[0], BLINK_INTERVAL_MS as u64);
        }
        assert_eq!(board.delays(), vec![BLINK_INTERVAL_MS; 8]);
        assert_eq!(board.now_ms(), 4 * 2 * BLINK_INTERVAL_MS as u64);
    }

    #[test]
    fn test_coprocessor_init_failure() {
        let board = MockBoard::new();
        let led = board
            .coprocessor_led()
            .fail_init_with(PlatformError::CapabilityInitFailure);
        let controller = BlinkController::new(led, board.console(), board.timer());

        let result = block_on(controller.run_until(AfterCycles(5)));
        assert_eq!(result, Err(PlatformError::CapabilityInitFailure));
        assert_eq!(result.unwrap_err().exit_code(), -1);

        assert_eq!(board.lines(), vec!["Failed to initialize CYW43"]);
        assert!(board.levels().is_empty());
        assert!(board.delays().is_empty());
    }

    #[test]
    fn test_run_returns_on_init_failure() {
        let board = MockBoard::new();
        let led = board
            .coprocessor_led()
            .fail_init_with(PlatformError::CapabilityInitFailure);
        let controller = BlinkController::new(led, board.console(), board.timer());

        match block_on(controller.run()) {
            Ok(never) => match never {},
            Err(err) => assert_eq!(err, PlatformError::CapabilityInitFailure),
        }
        assert_eq!(board.lines().len(), 1);
    }

    #[test]
    fn test_coprocessor_success_matches_direct_pin_cycles() {
        let board = MockBoard::new();
        let controller =
            BlinkController::new(board.coprocessor_led(), board.console(), board.timer());
        block_on(controller.run_until(AfterCycles(5))).unwrap();

        let lines = board.lines();
        assert_eq!(lines[..2], PICO2_W_BANNER.lines()[..]);
        assert_eq!(lines[2..], phase_lines(5)[..]);
    }

    #[test]
    fn test_hardware_fault_not_printed() {
        let board = MockBoard::new();
        let controller =
            BlinkController::new(board.gpio_led(40), board.console(), board.timer());

        let result = block_on(controller.run_until(AfterCycles(1)));
        assert!(matches!(result, Err(PlatformError::HardwareFault(_))));
        assert_eq!(result.unwrap_err().exit_code(), -1);
        assert!(board.lines().is_empty());
        assert!(board.levels().is_empty());
    }

    #[test]
    fn test_long_name_failure_line_truncated() {
        let board = MockBoard::new();
        let name = "CYW43439-wireless-coprocessor-on-the-pico-2-w-board";
        let led = board
            .led(name, PICO2_W_BANNER)
            .fail_init_with(PlatformError::CapabilityInitFailure);
        let controller = BlinkController::new(led, board.console(), board.timer());

        let result = block_on(controller.run_until(AfterCycles(1)));
        assert_eq!(result, Err(PlatformError::CapabilityInitFailure));

        let lines = board.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), CONSOLE_LINE_LEN);
        assert!(lines[0].starts_with("Failed to initialize CYW43439-"));
        assert!(format!("Failed to initialize {}", name).starts_with(&lines[0]));
    }

    #[test]
    fn test_init_order() {
        let board = MockBoard::new();
        let controller =
            BlinkController::new(board.direct_pin_led(), board.console(), board.timer());
        block_on(controller.run_until(AfterCycles(1))).unwrap();

        let events = board.events();
        assert_eq!(events[0], Event::ConsoleInit);
        assert_eq!(events[1], Event::LedInit);
        assert!(matches!(&events[2], Event::Line { text, .. } if text == PICO2_BANNER.title));
    }

    #[test]
    fn test_capability_initialized_once() {
        let board = MockBoard::new();
        let controller =
            BlinkController::new(board.coprocessor_led(), board.console(), board.timer());
        block_on(controller.run_until(AfterCycles(50))).unwrap();

        let inits = board
            .events()
            .iter()
            .filter(|e| **e == Event::LedInit)
            .count();
        assert_eq!(inits, 1);
    }

    #[test]
    fn test_blinker_state_after_cycles() {
        let board = MockBoard::new();
        let controller =
            BlinkController::new(board.direct_pin_led(), board.console(), board.timer());
        let mut blinker = block_on(controller.start()).unwrap();
        assert_eq!(blinker.state(), LedState::Off);
        assert_eq!(blinker.cycles(), 0);

        block_on(blinker.cycle());
        assert_eq!(blinker.state(), LedState::Off);
        assert_eq!(blinker.cycles(), 1);

        block_on(blinker.blink_until(AfterCycles(4)));
        assert_eq!(blinker.cycles(), 4);
    }

    #[test]
    fn test_zero_cycles_prints_only_banner() {
        let board = MockBoard::new();
        let controller =
            BlinkController::new(board.direct_pin_led(), board.console(), board.timer());
        let cycles = block_on(controller.run_until(AfterCycles(0))).unwrap();

        assert_eq!(cycles, 0);
        assert_eq!(board.lines(), PICO2_BANNER.lines().to_vec());
        assert!(board.levels().is_empty());
    }

    #[test]
    fn test_closure_stop_condition() {
        let board = MockBoard::new();
        let controller =
            BlinkController::new(board.direct_pin_led(), board.console(), board.timer());
        let mut checks = 0;
        let cycles = block_on(controller.run_until(|done: u32| {
            checks += 1;
            done == 2
        }))
        .unwrap();

        assert_eq!(cycles, 2);
        assert_eq!(checks, 3);
    }

    #[test]
    fn test_forever_never_stops() {
        let mut stop = Forever;
        assert!(!stop.should_stop(0));
        assert!(!stop.should_stop(u32::MAX));
    }

    #[test]
    fn test_restart_reproduces_sequence() {
        let run = || {
            let board = MockBoard::new();
            let controller =
                BlinkController::new(board.coprocessor_led(), board.console(), board.timer());
            block_on(controller.run_until(AfterCycles(3))).unwrap();
            board.events()
        };

        assert_eq!(run(), run());
    }
}
