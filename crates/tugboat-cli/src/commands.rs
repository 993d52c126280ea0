//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{
    emit, output_audit, output_field, output_report, output_table, output_validation,
};
use std::path::{Path, PathBuf};
use tracing::debug;
use tugboat_app::config::Config;
use tugboat_app::export::{export_json, export_to_excel, DEFAULT_JSON_FILE, DEFAULT_XLSX_FILE};
use tugboat_domain::service::run_audit;
use tugboat_domain::{DesignTable, ExportFormat, TugboatCalculator};
use tugboat_types::{Error, OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // The config command loads the file itself so --reset works on a broken file
    let config = match cli.command {
        Commands::Config { .. } => Config::default(),
        _ => Config::load()?,
    };
    debug!(?config, "Loaded configuration");

    let output_format = cli.format.unwrap_or(config.output_format);
    let calc = TugboatCalculator::coursework();

    match cli.command {
        Commands::Report => output_report(output_format, &calc.calculate(), config.report_width),

        Commands::Json {
            output,
            save,
            compact,
        } => {
            let format = if compact || config.compact_json {
                ExportFormat::JsonCompact
            } else {
                ExportFormat::Json
            };
            let target = if save || output.is_some() {
                Some(config.output_path(output, DEFAULT_JSON_FILE))
            } else {
                None
            };
            cmd_json(&calc, target, format)
        }

        Commands::Validate => cmd_validate(&calc, output_format, config.report_width),

        Commands::Get { table, field } => cmd_get(&calc, output_format, &table, field.as_deref()),

        Commands::Audit => output_audit(output_format, &run_audit(calc.values())),

        Commands::ExportXlsx { output } => {
            let output_path = config.output_path(output, DEFAULT_XLSX_FILE);
            export_to_excel(&calc.calculate(), &output_path)?;
            emit(&format!("Exported to: {}", output_path.display()))
        }

        Commands::Config {
            show,
            set_output,
            set_compact,
            set_output_dir,
            set_report_width,
            reset,
        } => cmd_config(
            &Config::config_path()?,
            show,
            set_output,
            set_compact,
            set_output_dir,
            set_report_width,
            reset,
        ),
    }
}

fn cmd_json(calc: &TugboatCalculator<'_>, output: Option<PathBuf>, format: ExportFormat) -> Result<()> {
    match output {
        Some(path) => {
            export_json(calc, &path, format)?;
            emit(&format!("Saved to: {}", path.display()))
        }
        None => emit(&calc.export(format)?),
    }
}

fn cmd_validate(calc: &TugboatCalculator<'_>, output_format: OutputFormat, width: usize) -> Result<()> {
    let report = calc.calculate();
    output_validation(output_format, &report, width)?;

    let v = &report.validation;
    if !v.energy_balance_ok {
        return Err(Error::ValidationFailed(format!(
            "energy balance does not close ({} kW in, {} kW out)",
            v.energy_balance_input, v.energy_balance_output
        )));
    }
    Ok(())
}

fn cmd_get(
    calc: &TugboatCalculator<'_>,
    output_format: OutputFormat,
    table: &str,
    field: Option<&str>,
) -> Result<()> {
    let table: DesignTable = table.parse()?;
    let values = calc.values();

    match field {
        Some(name) => output_field(output_format, name, &values.field(table, name)?),
        None => output_table(output_format, table, &values.table(table)?),
    }
}

fn cmd_config(
    path: &Path,
    show: bool,
    set_output: Option<OutputFormat>,
    set_compact: Option<bool>,
    set_output_dir: Option<PathBuf>,
    set_report_width: Option<usize>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(path)?;
        return emit(&format!("Configuration reset to defaults\n\n{}", config));
    }

    let mut config = Config::load_from(path)?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(compact) = set_compact {
        config.compact_json = compact;
        modified = true;
    }

    if let Some(dir) = set_output_dir {
        config.output_dir = Some(dir);
        modified = true;
    }

    if let Some(width) = set_report_width {
        config.report_width = width;
        modified = true;
    }

    if modified {
        config.save_to(path)?;
        emit("Configuration updated")?;
    }

    if show || !modified {
        emit(&config.to_string())?;
    }

    Ok(())
}
