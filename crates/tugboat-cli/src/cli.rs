//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tugboat_types::OutputFormat;

#[derive(Parser)]
#[command(name = "tugboat-calc")]
#[command(author = "inigo")]
#[command(version)]
#[command(about = "Ammonia-hydrogen fuel cell tugboat design results")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the full design report
    Report,

    /// Print the JSON document, or write it to a file
    Json {
        /// Output file (prints to stdout if not specified)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Save to tugboat_results.json in the configured output directory
        #[arg(long, short = 's')]
        save: bool,

        /// Single-line JSON (overrides config)
        #[arg(long)]
        compact: bool,
    },

    /// Check the energy balance; exits non-zero when it does not close
    Validate,

    /// Show one design table, or one field of it
    Get {
        /// Table name (power_chain, hydrogen, ammonia, autothermal, energy,
        /// storage, efficiency, economics, emissions)
        table: String,

        /// Field name as used in the report (e.g. E_input_kW)
        field: Option<String>,
    },

    /// Cross-check arithmetic relations between recorded figures
    Audit,

    /// Export the report to an Excel workbook
    ExportXlsx {
        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable compact JSON by default
        #[arg(long)]
        set_compact: Option<bool>,

        /// Set default directory for exported files
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Set console report width
        #[arg(long)]
        set_report_width: Option<usize>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_with_field() {
        let cli = Cli::try_parse_from(["tugboat-calc", "get", "energy", "E_input_kW"]).unwrap();
        match cli.command {
            Commands::Get { table, field } => {
                assert_eq!(table, "energy");
                assert_eq!(field.as_deref(), Some("E_input_kW"));
            }
            _ => panic!("expected get command"),
        }
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["tugboat-calc", "validate", "-f", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
