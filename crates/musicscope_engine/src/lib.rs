//! MusicScope engine: analytics service client and effect execution.
mod client;
mod coordinator;
mod engine;
mod types;

pub use client::{
    normalize_base_url, AnalyticsService, ClientSettings, ReqwestAnalyticsClient,
    DEFAULT_BASE_URL,
};
pub use coordinator::{load_all, run_etl};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use types::{EngineEvent, ServiceError};
