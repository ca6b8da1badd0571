//! Console line buffers
//!
//! Fixed-capacity line handling shared by the blink controller and the USB
//! console: building a line that may be too long, framing it for the wire,
//! and queueing it without waiting.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use heapless::String;

use crate::config::CONSOLE_LINE_LEN;

/// Line plus "\r\n"
pub const WIRE_LINE_LEN: usize = CONSOLE_LINE_LEN + 2;

/// One console line, without terminator
pub type ConsoleLine = String<CONSOLE_LINE_LEN>;

/// One console line as sent over a serial transport
pub type WireLine = String<WIRE_LINE_LEN>;

/// Append as much of `s` as fits, cutting on a character boundary
///
/// Returns `false` if anything was cut.
pub fn push_truncated<const N: usize>(buf: &mut String<N>, s: &str) -> bool {
    for c in s.chars() {
        if buf.push(c).is_err() {
            return false;
        }
    }
    true
}

/// Copy `line` into a console line buffer, truncating if needed
pub fn console_line(line: &str) -> ConsoleLine {
    let mut buf = ConsoleLine::new();
    push_truncated(&mut buf, line);
    buf
}

/// Terminate a line with "\r\n" for a serial terminal
pub fn frame_line(line: &str) -> WireLine {
    let mut wire = WireLine::new();
    push_truncated(&mut wire, &console_line(line));
    // Always fits: the body is at most CONSOLE_LINE_LEN
    let _ = wire.push_str("\r\n");
    wire
}

/// Queue a line for a writer task without waiting
///
/// Returns `false` when the queue is full and the line was dropped.
pub fn enqueue_line<M: RawMutex, const N: usize>(
    channel: &Channel<M, ConsoleLine, N>,
    line: &str,
) -> bool {
    channel.try_send(console_line(line)).is_ok()
}
