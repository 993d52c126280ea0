//! File export of the design report

pub mod excel;
pub mod json;

pub use excel::export_to_excel;
pub use json::export_json;

/// File name used when no JSON output path is given
pub const DEFAULT_JSON_FILE: &str = "tugboat_results.json";

/// File name used when no workbook output path is given
pub const DEFAULT_XLSX_FILE: &str = "tugboat_results.xlsx";
