//! Leveled diagnostics on stderr.
//!
//! stdout is reserved for the computed path, so every level here writes to
//! stderr.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Debug,
}

static LOG_LEVEL: OnceLock<LogLevel> = OnceLock::new();

pub fn init_logging(verbose: bool, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LogLevel::Error,
        (false, true) => LogLevel::Debug,
        (false, false) => LogLevel::Warning,
    };
    LOG_LEVEL.set(level).ok(); // Ignore errors if already set
}

pub fn get_log_level() -> LogLevel {
    *LOG_LEVEL.get().unwrap_or(&LogLevel::Warning)
}

pub fn enabled(level: LogLevel) -> bool {
    level <= get_log_level()
}

pub fn log(level: LogLevel, message: &str) {
    if enabled(level) {
        eprintln!("{}", format_line(level, message));
    }
}

fn format_line(level: LogLevel, message: &str) -> String {
    match level {
        LogLevel::Error => format!("Error: {message}"),
        LogLevel::Warning => format!("Warning: {message}"),
        LogLevel::Debug => format!("Debug: {message}"),
    }
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Warning, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Debug, &format!($($arg)*))
    };
}
