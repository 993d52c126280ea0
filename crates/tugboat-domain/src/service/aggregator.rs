//! Report aggregation, energy-balance validation and document export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tugboat_types::Result;

use crate::constants::{COURSEWORK, EDITORIAL_CLAIMS};
use crate::model::{DesignReport, DesignValues, EditorialClaims, EnergyBalanceCheck, Validation};

/// Serialization of the output document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Pretty-printed JSON, two-space indent
    #[default]
    Json,
    /// Single-line JSON
    JsonCompact,
}

/// Read-only view over a set of design tables.
///
/// Every operation is stateless; calling [`TugboatCalculator::calculate`]
/// twice yields equal documents.
#[derive(Debug, Clone, Copy)]
pub struct TugboatCalculator<'a> {
    values: &'a DesignValues,
    claims: &'a EditorialClaims,
}

impl Default for TugboatCalculator<'static> {
    fn default() -> Self {
        Self::coursework()
    }
}

impl TugboatCalculator<'static> {
    /// Calculator over the coursework report values
    pub fn coursework() -> Self {
        Self {
            values: &COURSEWORK,
            claims: &EDITORIAL_CLAIMS,
        }
    }
}

impl<'a> TugboatCalculator<'a> {
    pub fn new(values: &'a DesignValues, claims: &'a EditorialClaims) -> Self {
        Self { values, claims }
    }

    /// The underlying design tables
    pub fn values(&self) -> &'a DesignValues {
        self.values
    }

    /// All nine tables plus the validation block
    pub fn calculate(&self) -> DesignReport {
        debug!("Aggregating design tables");
        DesignReport::new(self.values, self.validate())
    }

    /// Check that the energy balance closes.
    ///
    /// `energy_balance_output` is the sum of the five output streams; the
    /// feasibility, margin and overall verdict are passed through from the
    /// editorial claims.
    pub fn validate(&self) -> Validation {
        let check = EnergyBalanceCheck::from_balance(&self.values.energy);
        if !check.closes() {
            warn!(
                input_kw = check.input_kw,
                output_kw = check.output_kw,
                "Energy balance does not close"
            );
        }
        Validation::new(check, self.claims)
    }

    /// Serialize the aggregate document
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        let report = self.calculate();
        let content = match format {
            ExportFormat::Json => serde_json::to_string_pretty(&report)?,
            ExportFormat::JsonCompact => serde_json::to_string(&report)?,
        };
        Ok(content)
    }

    /// Write the pretty-printed document to `path`.
    ///
    /// The file handle is released when this returns, whether or not the
    /// write succeeded. A missing parent directory is an error.
    pub fn write(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "Writing design report");
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.calculate())?;
        writer.flush()?;
        Ok(())
    }
}
