//! Platform logging initialization for the MusicScope terminal dashboard.
//!
//! File output goes to `./musicscope.log` in the current working directory,
//! which keeps the dashboard on stdout readable.

use std::path::Path;

use log::LevelFilter;

const LOG_FILE: &str = "./musicscope.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogDestination {
    /// Write to ./musicscope.log in current directory.
    File,
    /// Write to terminal (stderr for errors, stdout otherwise).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    fn writes_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Installs the global logger for `destination` at `level`.
///
/// A log file that cannot be created is reported on stderr and skipped.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = musicscope_logging::target_config();
    let mut sinks = Vec::new();
    if destination.writes_terminal() {
        sinks.push(musicscope_logging::terminal_sink(level, config.clone()));
    }
    if destination.writes_file() {
        match musicscope_logging::file_sink(Path::new(LOG_FILE), level, config) {
            Ok(sink) => sinks.push(sink),
            Err(err) => eprintln!("Warning: Could not create log file at {LOG_FILE}: {err}"),
        }
    }
    musicscope_logging::install(sinks);
}
