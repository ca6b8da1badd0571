//! Console interface trait
//!
//! Line-oriented text output, the firmware's equivalent of stdout.

/// Line sink for user-facing console output
///
/// Writes never fail from the caller's point of view. A transport that
/// cannot deliver a line (no host attached, queue full) drops it.
pub trait ConsoleInterface {
    /// Prepare the transport
    ///
    /// Called once before the first line. Transports that are ready on
    /// construction keep the default.
    fn init(&mut self) {}

    /// Write one line; the transport appends its own line terminator
    fn write_line(&mut self, line: &str);
}
