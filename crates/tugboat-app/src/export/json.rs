//! JSON file export

use std::path::Path;

use tracing::info;
use tugboat_domain::{ExportFormat, TugboatCalculator};
use tugboat_types::Result;

/// Write the design report document to `path` in the given format.
///
/// I/O failures (missing directory, permission denied, disk full) are
/// returned unchanged.
pub fn export_json(calc: &TugboatCalculator<'_>, path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => calc.write(path)?,
        ExportFormat::JsonCompact => std::fs::write(path, calc.export(format)?)?,
    }
    info!(path = %path.display(), ?format, "Exported design report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tugboat_domain::DesignReport;

    #[test]
    fn test_compact_export_is_single_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compact.json");
        let calc = TugboatCalculator::coursework();

        export_json(&calc, &path, ExportFormat::JsonCompact).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        let parsed: DesignReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, calc.calculate());
    }

    #[test]
    fn test_missing_directory_is_surfaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let calc = TugboatCalculator::coursework();

        assert!(export_json(&calc, &path, ExportFormat::Json).is_err());
        assert!(export_json(&calc, &path, ExportFormat::JsonCompact).is_err());
    }
}
