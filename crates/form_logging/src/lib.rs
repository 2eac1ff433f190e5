#![deny(missing_docs)]
//! Shared logging utilities for the upload form workspace.
//!
//! This crate provides the `form_*` logging macros used across the codebase,
//! a console logger for the browser build and a minimal test initializer for
//! the global logger.

#[cfg(target_arch = "wasm32")]
mod console;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! form_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! form_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! form_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! form_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! form_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Picks the default level: debug in debug builds, info in release builds.
pub fn default_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Installs the global logger at `level`: the browser console on wasm32, a
/// terminal logger elsewhere.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize(level: log::LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    console::install(level);

    #[cfg(not(target_arch = "wasm32"))]
    {
        use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

        // Ignore the error if a logger was already set.
        let _ = CombinedLogger::init(vec![TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    }
}

/// Initializes the logger at the default level for use in tests.
pub fn initialize_for_tests() {
    initialize(default_level());
}
