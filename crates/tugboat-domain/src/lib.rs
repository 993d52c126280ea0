//! Domain layer for the ammonia tugboat design calculator
//!
//! Holds the nine design tables of the coursework report, the process-wide
//! constant table, and the services that aggregate, validate and audit it.

pub mod constants;
pub mod model;
pub mod service;

pub use constants::COURSEWORK;
pub use model::{DesignReport, DesignTable, DesignValues, FieldValue, Validation};
pub use service::aggregator::{ExportFormat, TugboatCalculator};
