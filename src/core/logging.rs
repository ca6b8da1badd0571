//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (`rp2350`): Uses defmt over RTT
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! These are diagnostics for the developer at the probe. The console lines a
//! user sees (`"LED ON"`, banners) go through
//! [`ConsoleInterface`](crate::platform::traits::ConsoleInterface) instead.
//!
//! Format arguments must use plain `{}` placeholders so the same call site
//! compiles against both defmt and `core::fmt`.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), test))]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}
