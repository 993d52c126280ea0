//! Excel export functionality

use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde_json::Value;
use std::path::Path;
use tracing::info;
use tugboat_domain::{DesignReport, DesignTable};
use tugboat_types::{Error, Result};

fn excel(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export the design report to an Excel workbook.
///
/// The first sheet summarises the validation block; each design table gets a
/// sheet of its own with one row per field.
pub fn export_to_excel(report: &DesignReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let values = report.values();
    for table in DesignTable::ALL {
        let fields = values.table(table)?;
        let sheet = workbook.add_worksheet();
        write_table_sheet(sheet, table, &fields)?;
    }

    workbook.save(output_path).map_err(excel)?;

    info!(path = %output_path.display(), "Exported workbook");
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &DesignReport) -> Result<()> {
    sheet.set_name("Summary").map_err(excel)?;

    let header_format = Format::new().set_bold();
    let v = &report.validation;

    sheet
        .write_string_with_format(0, 0, "Ammonia Tugboat Design Report", &header_format)
        .map_err(excel)?;
    sheet.write_string(2, 0, "Generated:").map_err(excel)?;
    sheet
        .write_string(2, 1, Utc::now().to_rfc3339())
        .map_err(excel)?;

    sheet
        .write_string_with_format(4, 0, "Validation", &header_format)
        .map_err(excel)?;

    sheet.write_string(5, 0, "Energy input (kW)").map_err(excel)?;
    sheet
        .write_number(5, 1, v.energy_balance_input as f64)
        .map_err(excel)?;
    sheet.write_string(6, 0, "Energy output (kW)").map_err(excel)?;
    sheet
        .write_number(6, 1, v.energy_balance_output as f64)
        .map_err(excel)?;
    sheet.write_string(7, 0, "Energy balance closes").map_err(excel)?;
    sheet.write_boolean(7, 1, v.energy_balance_ok).map_err(excel)?;

    sheet
        .write_string_with_format(9, 0, "Stated in report (not computed)", &header_format)
        .map_err(excel)?;
    sheet.write_string(10, 0, "Autothermal feasible").map_err(excel)?;
    sheet.write_boolean(10, 1, v.autothermal_feasible).map_err(excel)?;
    sheet.write_string(11, 0, "Autothermal margin").map_err(excel)?;
    sheet.write_string(11, 1, &v.autothermal_margin).map_err(excel)?;
    sheet.write_string(12, 0, "All checks pass").map_err(excel)?;
    sheet.write_boolean(12, 1, v.all_checks_pass).map_err(excel)?;

    sheet.set_column_width(0, 34).map_err(excel)?;
    sheet.set_column_width(1, 28).map_err(excel)?;

    Ok(())
}

fn write_table_sheet(
    sheet: &mut Worksheet,
    table: DesignTable,
    fields: &serde_json::Map<String, Value>,
) -> Result<()> {
    sheet.set_name(table.title()).map_err(excel)?;

    let header_format = Format::new().set_bold();
    sheet
        .write_string_with_format(0, 0, "Field", &header_format)
        .map_err(excel)?;
    sheet
        .write_string_with_format(0, 1, "Value", &header_format)
        .map_err(excel)?;

    for (idx, (name, value)) in fields.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, name).map_err(excel)?;

        match value {
            Value::Number(n) => {
                if let Some(x) = n.as_f64() {
                    sheet.write_number(row, 1, x).map_err(excel)?;
                }
            }
            Value::String(s) => {
                sheet.write_string(row, 1, s).map_err(excel)?;
            }
            other => {
                sheet.write_string(row, 1, other.to_string()).map_err(excel)?;
            }
        }
    }

    sheet.set_column_width(0, 30).map_err(excel)?;
    sheet.set_column_width(1, 16).map_err(excel)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tugboat_domain::TugboatCalculator;

    #[test]
    fn test_workbook_is_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        let report = TugboatCalculator::coursework().calculate();

        export_to_excel(&report, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx files are zip archives
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("report.xlsx");
        let report = TugboatCalculator::coursework().calculate();

        assert!(export_to_excel(&report, &path).is_err());
    }
}
