//! Bounded capability bring-up
//!
//! Some bring-up sequences wait on external hardware that may never answer.
//! [`init_within`] races such a sequence against a timer delay so a stuck
//! chip surfaces as [`PlatformError::CapabilityInitFailure`] instead of a
//! hang.

use core::future::Future;

use embassy_futures::select::{select, Either};

use crate::log_error;
use crate::platform::{error::PlatformError, traits::TimerInterface, Result};

/// Run `bring_up` to completion or fail after `timeout_ms`
///
/// The bring-up future is polled first, so one that is already finished
/// wins even with a zero timeout. When the deadline fires the bring-up
/// future is dropped mid-way.
pub async fn init_within<T, F, R>(timer: &mut T, timeout_ms: u32, bring_up: F) -> Result<R>
where
    T: TimerInterface,
    F: Future<Output = Result<R>>,
{
    match select(bring_up, timer.delay_ms(timeout_ms)).await {
        Either::First(result) => result,
        Either::Second(()) => {
            log_error!("Bring-up did not finish within {} ms", timeout_ms);
            Err(PlatformError::CapabilityInitFailure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::HardwareFault;
    use crate::platform::mock::MockBoard;
    use embassy_futures::block_on;

    #[test]
    fn test_stalled_bring_up_times_out() {
        let board = MockBoard::new();
        let mut timer = board.timer();

        let result: Result<()> =
            block_on(init_within(&mut timer, 5_000, core::future::pending()));
        assert_eq!(result, Err(PlatformError::CapabilityInitFailure));
        assert_eq!(board.delays(), vec![5_000]);
        assert_eq!(board.now_ms(), 5_000);
    }

    #[test]
    fn test_stall_in_later_step_times_out() {
        let board = MockBoard::new();
        let mut timer = board.timer();
        let mut steps = 0;

        // First step finishes, the second one never does
        let bring_up = async {
            steps += 1;
            core::future::pending::<()>().await;
            steps += 1;
            Ok(())
        };
        let result = block_on(init_within(&mut timer, 100, bring_up));

        assert_eq!(result, Err(PlatformError::CapabilityInitFailure));
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_finished_bring_up_wins() {
        let board = MockBoard::new();
        let mut timer = board.timer();

        let result = block_on(init_within(&mut timer, 0, async { Ok(7u8) }));
        assert_eq!(result, Ok(7));
        assert_eq!(board.now_ms(), 0);
    }

    #[test]
    fn test_bring_up_error_passes_through() {
        let board = MockBoard::new();
        let mut timer = board.timer();

        let result: Result<()> = block_on(init_within(&mut timer, 100, async {
            Err(HardwareFault::InvalidPin(99).into())
        }));
        assert_eq!(
            result,
            Err(PlatformError::HardwareFault(HardwareFault::InvalidPin(99)))
        );
    }
}
