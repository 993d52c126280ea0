//! Output formatting module

use std::io::{self, Write};
use tugboat_app::report::{render_report, render_validation};
use tugboat_domain::service::{generate_audit_report, AuditCheck};
use tugboat_domain::{DesignReport, DesignTable, FieldValue};
use tugboat_types::{OutputFormat, Result};

/// Write one line to stdout, surfacing a closed pipe as an I/O error
pub fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

pub fn output_report(output_format: OutputFormat, report: &DesignReport, width: usize) -> Result<()> {
    if output_format == OutputFormat::Json {
        emit(&serde_json::to_string_pretty(report)?)
    } else {
        emit(render_report(report, width).trim_end_matches('\n'))
    }
}

pub fn output_validation(output_format: OutputFormat, report: &DesignReport, width: usize) -> Result<()> {
    if output_format == OutputFormat::Json {
        emit(&serde_json::to_string_pretty(&report.validation)?)
    } else {
        emit(render_validation(report, width).trim_end_matches('\n'))
    }
}

pub fn output_table(
    output_format: OutputFormat,
    table: DesignTable,
    fields: &serde_json::Map<String, serde_json::Value>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return emit(&serde_json::to_string_pretty(fields)?);
    }

    let mut text = format!(
        "\n{}\n{}",
        table.title(),
        "=".repeat(table.title().chars().count())
    );
    for (name, value) in fields {
        let shown = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        text.push_str(&format!("\n{:<28} {}", name, shown));
    }
    emit(&text)
}

pub fn output_field(output_format: OutputFormat, field: &str, value: &FieldValue) -> Result<()> {
    if output_format == OutputFormat::Json {
        let json_value = match value {
            FieldValue::Integer(i) => serde_json::Value::from(*i),
            FieldValue::Float(x) => serde_json::Value::from(*x),
            FieldValue::Text(s) => serde_json::Value::from(s.as_str()),
        };
        let mut object = serde_json::Map::new();
        object.insert(field.to_string(), json_value);
        emit(&serde_json::to_string_pretty(&object)?)
    } else {
        emit(&value.to_string())
    }
}

pub fn output_audit(output_format: OutputFormat, checks: &[AuditCheck]) -> Result<()> {
    if output_format == OutputFormat::Json {
        emit(&serde_json::to_string_pretty(checks)?)
    } else {
        emit(generate_audit_report(checks).trim_end_matches('\n'))
    }
}
