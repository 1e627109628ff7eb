#![deny(missing_docs)]
//! Log macros for the scan history crates.
//!
//! Core and store code log through the `history_*` macros and never pick a
//! backend. `scan-history` installs one at startup from its `--log` flags;
//! test binaries call [`initialize_for_tests`].

use log::LevelFilter;

/// Row-level detail, such as each position touched by a delete.
#[macro_export]
macro_rules! history_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Screen transitions: reloads, selection start and end, dismissed dialogs.
#[macro_export]
macro_rules! history_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Changes the user asked for: deletes, clears and exports.
#[macro_export]
macro_rules! history_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// A store or share failure the screen recovered from.
#[macro_export]
macro_rules! history_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// A row event that does not match the list, or a failure that ends a run.
#[macro_export]
macro_rules! history_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Reads the `--log-level` argument of `scan-history`.
///
/// Case and surrounding spaces are ignored; anything unrecognised means `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Sends log output to the terminal for the current test binary.
///
/// Every test may call it; only the first call in a process installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // `cargo test --release` keeps output to info.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Err means an earlier test already installed one.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_is_case_insensitive() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level(" warn "), LevelFilter::Warn);
    }

    #[test]
    fn parse_level_falls_back_to_info() {
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }

    #[test]
    fn initialize_twice_is_harmless() {
        initialize_for_tests();
        initialize_for_tests();
        history_info!("logger initialized twice");
    }
}
