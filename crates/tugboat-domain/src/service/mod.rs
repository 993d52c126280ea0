//! Domain services

pub mod aggregator;
pub mod audit;

pub use aggregator::{ExportFormat, TugboatCalculator};
pub use audit::{generate_audit_report, run_audit, AuditCheck};
