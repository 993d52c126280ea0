//! Integration tests for the design report document

use proptest::prelude::*;
use proptest::sample::Index;
use serde_json::Value;
use tempfile::tempdir;
use tugboat_domain::{
    DesignReport, DesignTable, ExportFormat, FieldValue, TugboatCalculator, COURSEWORK,
};
use tugboat_types::Error;

#[test]
fn test_energy_balance_closes() {
    let v = TugboatCalculator::coursework().validate();
    assert_eq!(v.energy_balance_input, v.energy_balance_output);
    assert_eq!(v.energy_balance_output, 1050 + 1660 + 983 + 88 + 819);
    assert!(v.energy_balance_ok);
}

#[test]
fn test_export_round_trip_matches_calculate() {
    let calc = TugboatCalculator::coursework();
    for format in [ExportFormat::Json, ExportFormat::JsonCompact] {
        let text = calc.export(format).unwrap();
        let parsed: DesignReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, calc.calculate());
    }
}

#[test]
fn test_repeated_calls_keep_every_literal() {
    let calc = TugboatCalculator::coursework();
    let first = serde_json::to_value(calc.calculate()).unwrap();
    for _ in 0..5 {
        let again = serde_json::to_value(calc.calculate()).unwrap();
        assert_eq!(first, again);
    }
    assert_eq!(*COURSEWORK, calc.calculate().values());
}

#[test]
fn test_economics_and_emissions_scenarios() {
    let report = TugboatCalculator::coursework().calculate();
    assert_eq!(report.economics.opex_premium, 3.25);
    assert_eq!(report.economics.nh3_total_opex, 2_640_000);
    assert_eq!(report.emissions.green_nh3_co2_t_yr, 0);
    assert_eq!(report.emissions.green_vs_diesel, "-100%");
}

#[test]
fn test_validation_block_shape() {
    let text = TugboatCalculator::coursework()
        .export(ExportFormat::Json)
        .unwrap();
    let doc: Value = serde_json::from_str(&text).unwrap();
    let validation = &doc["validation"];
    assert_eq!(validation["energy_balance_input"], 4600);
    assert_eq!(validation["energy_balance_output"], 4600);
    assert_eq!(validation["energy_balance_ok"], true);
    assert_eq!(validation["autothermal_feasible"], true);
    assert_eq!(validation["autothermal_margin"], "2.3×");
    assert_eq!(validation["all_checks_pass"], true);
}

#[test]
fn test_write_then_read_back() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tugboat_results.json");

    let calc = TugboatCalculator::coursework();
    calc.write(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, calc.export(ExportFormat::Json).unwrap());
    let parsed: DesignReport = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, calc.calculate());
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("does_not_exist").join("results.json");

    let result = TugboatCalculator::coursework().write(&path);
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("results.json");
    std::fs::write(&path, "stale content that is longer than nothing").unwrap();

    TugboatCalculator::coursework().write(&path).unwrap();
    let parsed: DesignReport =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(parsed.validation.energy_balance_ok);
}

proptest! {
    /// Every field of every table is reachable by key and agrees with the document.
    #[test]
    fn field_lookup_matches_document(table_idx in 0usize..9, field in any::<Index>()) {
        let table = DesignTable::ALL[table_idx];
        let names = COURSEWORK.field_names(table).unwrap();
        let name = &names[field.index(names.len())];

        let doc = serde_json::to_value(TugboatCalculator::coursework().calculate()).unwrap();
        let expected = &doc[table.key()][name.as_str()];

        match COURSEWORK.field(table, name).unwrap() {
            FieldValue::Integer(i) => {
                prop_assert_eq!(expected.as_u64(), Some(i));
            }
            FieldValue::Float(x) => {
                prop_assert!(expected.is_f64());
                prop_assert_eq!(expected.as_f64(), Some(x));
            }
            FieldValue::Text(s) => {
                prop_assert_eq!(expected.as_str(), Some(s.as_str()));
            }
        }
    }

    /// Table names survive a Display/FromStr round trip.
    #[test]
    fn table_name_round_trip(table_idx in 0usize..9) {
        let table = DesignTable::ALL[table_idx];
        prop_assert_eq!(table.to_string().parse::<DesignTable>().unwrap(), table);
    }
}
