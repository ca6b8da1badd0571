//! Core services shared by every board
//!
//! - [`logging`]: diagnostic logging macros
//! - [`console_line`]: fixed-capacity console line buffers

pub mod console_line;
pub mod logging;
