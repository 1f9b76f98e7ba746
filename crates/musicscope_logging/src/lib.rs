#![deny(missing_docs)]
//! Shared logging utilities for the MusicScope workspace.
//!
//! This crate provides the `scope_*` logging macros used across the codebase,
//! the simplelog sinks the application installs, and a minimal test
//! initializer for the global logger. Every macro logs under [`LOG_TARGET`]
//! and [`target_config`] keeps only that target, so dependency noise
//! (reqwest, hyper) never reaches a sink.

use std::fs::File;
use std::io;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Log target shared by all `scope_*` macros.
pub const LOG_TARGET: &str = "musicscope";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! scope_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! scope_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! scope_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! scope_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! scope_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Parses a level name such as `"debug"` or `"WARN"`.
///
/// Unknown names yield `None` so callers can fall back to their default.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// simplelog configuration that drops every record outside [`LOG_TARGET`].
pub fn target_config() -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str(LOG_TARGET);
    builder.build()
}

/// Sink writing to the terminal (stderr for errors, stdout otherwise).
pub fn terminal_sink(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

/// Sink writing to `path`, truncating any previous log.
pub fn file_sink(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> io::Result<Box<dyn SharedLogger>> {
    let file = File::create(path)?;
    Ok(WriteLogger::new(level, config, file))
}

/// Installs `sinks` as the global logger.
///
/// Returns `false` when there is nothing to install or a logger is already set.
pub fn install(sinks: Vec<Box<dyn SharedLogger>>) -> bool {
    !sinks.is_empty() && CombinedLogger::init(sinks).is_ok()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = install(vec![terminal_sink(level, Config::default())]);
}
