//! Application layer - configuration, console report, JSON and Excel export

pub mod config;
pub mod export;
pub mod report;
