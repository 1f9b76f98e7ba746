//! Terminal front end: configuration, logging, effect execution and rendering.
pub mod config;

mod app;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
