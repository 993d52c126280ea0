//! Consistency audit of the design tables
//!
//! Recomputes simple arithmetic relations between the literal figures and
//! compares them with the recorded values. The audit is informational and
//! never feeds the validation block of the output document.

use serde::{Deserialize, Serialize};

use crate::model::DesignValues;

/// One arithmetic cross-check between recorded figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditCheck {
    /// Table the recorded value belongs to
    pub table: String,
    /// Relation being checked
    pub relation: String,
    /// Value recomputed from other fields
    pub expected: f64,
    /// Value as recorded in the report
    pub recorded: f64,
    /// Accepted absolute difference (covers the report's rounding)
    pub tolerance: f64,
}

impl AuditCheck {
    fn new(table: &str, relation: &str, expected: f64, recorded: f64, tolerance: f64) -> Self {
        Self {
            table: table.to_string(),
            relation: relation.to_string(),
            expected,
            recorded,
            tolerance,
        }
    }

    pub fn deviation(&self) -> f64 {
        self.recorded - self.expected
    }

    pub fn passed(&self) -> bool {
        self.deviation().abs() <= self.tolerance
    }
}

/// Run every cross-check against a set of design tables
pub fn run_audit(values: &DesignValues) -> Vec<AuditCheck> {
    let pc = &values.power_chain;
    let h2 = &values.hydrogen;
    let nh3 = &values.ammonia;
    let at = &values.autothermal;
    let en = &values.energy;
    let st = &values.storage;
    let eff = &values.efficiency;
    let ec = &values.economics;
    let em = &values.emissions;

    let f = f64::from;

    vec![
        AuditCheck::new(
            "power_chain",
            "FC gross = DC/DC input + balance of plant",
            f(pc.p_dcdc_input_kw) + f(pc.p_bop_kw),
            f(pc.p_fc_gross_kw),
            0.5,
        ),
        AuditCheck::new(
            "power_chain",
            "FC capacity = modules x module power",
            f(pc.fc_modules) * f(pc.fc_module_power_kw),
            f(pc.fc_capacity_kw),
            0.5,
        ),
        AuditCheck::new(
            "power_chain",
            "FC utilisation = gross / capacity",
            f(pc.p_fc_gross_kw) / f(pc.fc_capacity_kw) * 100.0,
            f(pc.fc_utilisation_pct),
            0.5,
        ),
        AuditCheck::new(
            "hydrogen",
            "cracker H2 = PSA product + PSA tail gas",
            h2.m_h2_fresh_kg_h + h2.m_h2_psa_tail_kg_h,
            h2.m_h2_from_cracker_kg_h,
            0.05,
        ),
        AuditCheck::new(
            "hydrogen",
            "anode inlet = fresh feed + recycle",
            h2.m_h2_fresh_kg_h + h2.m_h2_recycle_kg_h,
            h2.m_h2_inlet_kg_h,
            0.05,
        ),
        AuditCheck::new(
            "hydrogen",
            "anode exhaust = inlet - consumed",
            h2.m_h2_inlet_kg_h - h2.m_h2_consumed_kg_h,
            h2.m_h2_exhaust_kg_h,
            0.05,
        ),
        AuditCheck::new(
            "hydrogen",
            "combustor feed = PSA tail gas + anode purge",
            h2.m_h2_psa_tail_kg_h + h2.m_h2_purge_kg_h,
            h2.m_h2_to_combustor_kg_h,
            0.05,
        ),
        AuditCheck::new(
            "ammonia",
            "NH3 feed = cracker H2 + N2 + NH3 slip",
            h2.m_h2_from_cracker_kg_h + nh3.m_n2_kg_h + nh3.m_nh3_slip_kg_h,
            f(nh3.m_nh3_kg_h),
            0.5,
        ),
        AuditCheck::new(
            "autothermal",
            "heat available = combustion energy x burner efficiency",
            f(at.combustion_energy_kw) * f(at.burner_efficiency_pct) / 100.0,
            f(at.heat_available_kw),
            1.0,
        ),
        AuditCheck::new(
            "autothermal",
            "surplus = available - cracker requirement - losses",
            f(at.heat_available_kw) - f(at.cracker_requirement_kw) - f(at.heat_losses_kw),
            f(at.surplus_kw),
            0.5,
        ),
        AuditCheck::new(
            "storage",
            "endurance fuel = NH3 flow x endurance",
            f(nh3.m_nh3_kg_h) * f(st.endurance_hours),
            f(st.m_nh3_12h_kg),
            0.5,
        ),
        AuditCheck::new(
            "storage",
            "total fuel = endurance fuel x (1 + buffer)",
            f(st.m_nh3_12h_kg) * (1.0 + f(st.buffer_pct) / 100.0),
            f(st.m_nh3_total_kg),
            0.5,
        ),
        AuditCheck::new(
            "efficiency",
            "eta = propulsion and battery / input",
            f(en.e_propulsion_battery_kw) / f(en.e_input_kw),
            eff.eta_system,
            0.0005,
        ),
        AuditCheck::new(
            "economics",
            "annual NH3 = NH3 flow x operating hours",
            f(nh3.m_nh3_kg_h) * f(ec.operating_hours_per_year) / 1000.0,
            f(ec.annual_nh3_tonnes),
            0.5,
        ),
        AuditCheck::new(
            "economics",
            "green NH3 OPEX = fuel + carbon + other",
            f(ec.nh3_fuel_cost) + f(ec.nh3_carbon_cost) + f(ec.nh3_other_cost),
            f(ec.nh3_total_opex),
            0.5,
        ),
        AuditCheck::new(
            "economics",
            "diesel OPEX = fuel + carbon + other",
            f(ec.diesel_fuel_cost) + f(ec.diesel_carbon_cost) + f(ec.diesel_other_cost),
            f(ec.diesel_total_opex),
            0.5,
        ),
        AuditCheck::new(
            "economics",
            "OPEX premium = green NH3 OPEX / diesel OPEX",
            f(ec.nh3_total_opex) / f(ec.diesel_total_opex),
            ec.opex_premium,
            0.005,
        ),
        AuditCheck::new(
            "economics",
            "diesel carbon cost = diesel CO2 x carbon price",
            f(em.diesel_co2_t_yr) * f(ec.carbon_price_per_tonne),
            f(ec.diesel_carbon_cost),
            0.5,
        ),
        AuditCheck::new(
            "emissions",
            "blue NH3 CO2 = annual NH3 x blue factor",
            f(ec.annual_nh3_tonnes) * em.blue_co2_factor,
            f(em.blue_nh3_co2_t_yr),
            0.5,
        ),
        AuditCheck::new(
            "emissions",
            "green NH3 CO2 = annual NH3 x green factor",
            f(ec.annual_nh3_tonnes) * em.green_co2_factor,
            f(em.green_nh3_co2_t_yr),
            0.5,
        ),
    ]
}

/// Generate a text report of audit results
pub fn generate_audit_report(checks: &[AuditCheck]) -> String {
    let passed = checks.iter().filter(|c| c.passed()).count();

    let mut report = String::new();
    report.push_str(&"=".repeat(80));
    report.push('\n');
    report.push_str("CONSISTENCY AUDIT\n");
    report.push_str(&"=".repeat(80));
    report.push('\n');
    report.push_str(&format!(
        "  {:<12} {:<50} {:>12} {:>12}\n",
        "Table", "Relation", "Expected", "Recorded"
    ));
    report.push_str(&format!("  {}\n", "-".repeat(78)));

    for check in checks {
        let mark = if check.passed() { "ok" } else { "MISMATCH" };
        report.push_str(&format!(
            "  {:<12} {:<50} {:>12} {:>12}  {}\n",
            check.table,
            truncate_str(&check.relation, 50),
            format_number(check.expected),
            format_number(check.recorded),
            mark
        ));
    }

    report.push('\n');
    report.push_str(&format!("  {}/{} checks consistent\n", passed, checks.len()));
    report
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e12 {
        format!("{:.0}", value)
    } else if value.abs() < 1.0 {
        format!("{:.4}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COURSEWORK;

    #[test]
    fn test_all_checks_pass_on_coursework() {
        let checks = run_audit(&COURSEWORK);
        let failed: Vec<_> = checks.iter().filter(|c| !c.passed()).collect();
        assert!(failed.is_empty(), "inconsistent figures: {:?}", failed);
    }

    #[test]
    fn test_detects_altered_opex() {
        let mut values = COURSEWORK.clone();
        // The uncorrected "other costs" figure from the original table
        values.economics.nh3_other_cost = 24_000;
        let checks = run_audit(&values);
        let opex = checks
            .iter()
            .find(|c| c.relation.starts_with("green NH3 OPEX"))
            .unwrap();
        assert!(!opex.passed());
        assert!((opex.deviation() - 216_000.0).abs() < 0.5);
    }

    #[test]
    fn test_report_counts_passes() {
        let checks = run_audit(&COURSEWORK);
        let report = generate_audit_report(&checks);
        assert!(report.contains("CONSISTENCY AUDIT"));
        assert!(report.contains(&format!("{}/{} checks consistent", checks.len(), checks.len())));
        assert!(!report.contains("MISMATCH"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2_640_000.0), "2640000");
        assert_eq!(format_number(0.22826), "0.2283");
        assert_eq!(format_number(3.2472), "3.25");
    }
}
