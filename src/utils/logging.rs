//! Logging setup plus per-module switches.
//!
//! Every module that logs through these macros defines its own flag:
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_info, log_warn, log_error};
//!
//! log_info!("loaded {} recipes", count);
//! ```
//! Setting the flag to `false` silences that module regardless of `RUST_LOG`.

use log::LevelFilter;

/// Initialise `env_logger` from `RUST_LOG`, defaulting to `Info` (or `Debug`
/// when `debug` is set).
pub fn init(debug: bool) {
    let default_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    builder.parse_default_env();

    // A second init (e.g. from tests) is harmless.
    let _ = builder.try_init();
}

/// True when `LARDER_DEBUG` is `1` or `true`.
pub fn debug_requested() -> bool {
    std::env::var("LARDER_DEBUG")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
