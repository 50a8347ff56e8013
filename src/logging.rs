//! Logging macros.
//!
//! - `defmt` feature: forwards to `defmt`
//! - crate unit tests with `std`: prints to stdout
//! - otherwise: no-op (arguments are still evaluated by reference)
//!
//! Only use `{}` placeholders with integers, bools and `&str` so the same
//! format string is valid for both `defmt` and `core::fmt`.

/// Log informational message
macro_rules! log_info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($fmt $(, $arg)*);
        #[cfg(all(not(feature = "defmt"), feature = "std", test))]
        ::std::println!(concat!("[INFO] ", $fmt) $(, $arg)*);
        #[cfg(not(any(feature = "defmt", all(feature = "std", test))))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

/// Log warning message
macro_rules! log_warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($fmt $(, $arg)*);
        #[cfg(all(not(feature = "defmt"), feature = "std", test))]
        ::std::println!(concat!("[WARN] ", $fmt) $(, $arg)*);
        #[cfg(not(any(feature = "defmt", all(feature = "std", test))))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

/// Log debug message
macro_rules! log_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($fmt $(, $arg)*);
        #[cfg(all(not(feature = "defmt"), feature = "std", test))]
        ::std::println!(concat!("[DEBUG] ", $fmt) $(, $arg)*);
        #[cfg(not(any(feature = "defmt", all(feature = "std", test))))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

pub(crate) use {log_debug, log_info, log_warn};
