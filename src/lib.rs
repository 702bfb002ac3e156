//! Library crate root re-exporting resolver, config, and host modules.

pub mod cli;
pub mod config;
pub mod errors;
pub mod host;
pub mod resolver;
pub mod telemetry;
