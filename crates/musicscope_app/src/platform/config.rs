use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use musicscope_core::{DEFAULT_COMPARISON, DEFAULT_PRIMARY};
use musicscope_engine::{ClientSettings, DEFAULT_BASE_URL};

use super::logging::LogDestination;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "musicscope",
    about = "Terminal dashboard for MusicScope listening analytics"
)]
pub struct AppConfig {
    /// Base URL of the analytics service.
    #[arg(long, env = "MUSICSCOPE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Upper bound for every remote call, in seconds.
    #[arg(long, env = "MUSICSCOPE_TIMEOUT_SECS", default_value_t = 20)]
    pub timeout_secs: u64,

    /// Initial primary country.
    #[arg(long, default_value = DEFAULT_PRIMARY)]
    pub country: String,

    /// Initial comparison country.
    #[arg(long, default_value = DEFAULT_COMPARISON)]
    pub compare: String,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "MUSICSCOPE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..ClientSettings::with_base_url(&self.base_url)
        }
    }

    pub fn level(&self) -> LevelFilter {
        musicscope_logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}
