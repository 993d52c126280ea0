//! Console report rendering
//!
//! Lays the design report out as fixed-width tables under `=`-padded section
//! banners. Everything shown here is already present in the JSON document.

use tugboat_domain::constants::physical::PHYSICAL_CONSTANTS;
use tugboat_domain::DesignReport;

/// Render the complete console report
pub fn render_report(report: &DesignReport, width: usize) -> String {
    let mut out = ReportBuilder::new(width);

    out.rule();
    out.line("AMMONIA-HYDROGEN FUEL CELL TUGBOAT - DESIGN RESULTS");
    out.line("Module 41283 - Introduction to Hydrogen and Fuel Cells");
    out.rule();

    write_specifications(&mut out, report);
    write_power_chain(&mut out, report);
    write_process_flow(&mut out, report);
    write_anode_recirculation(&mut out, report);
    write_autothermal(&mut out, report);
    write_energy_balance(&mut out, report);
    write_efficiency(&mut out, report);
    write_opex(&mut out, report);
    write_emissions(&mut out, report);
    write_physical_constants(&mut out);
    write_validation(&mut out, report);
    write_summary(&mut out, report);

    out.blank();
    out.rule();
    out.finish()
}

/// Render only the validation block
pub fn render_validation(report: &DesignReport, width: usize) -> String {
    let mut out = ReportBuilder::new(width);
    write_validation(&mut out, report);
    out.finish()
}

struct ReportBuilder {
    text: String,
    width: usize,
}

impl ReportBuilder {
    fn new(width: usize) -> Self {
        Self {
            text: String::new(),
            width,
        }
    }

    fn line(&mut self, s: &str) {
        self.text.push_str(s);
        self.text.push('\n');
    }

    fn row(&mut self, s: String) {
        self.text.push_str("  ");
        self.text.push_str(&s);
        self.text.push('\n');
    }

    fn blank(&mut self) {
        self.text.push('\n');
    }

    fn rule(&mut self) {
        self.line(&"=".repeat(self.width));
    }

    fn section(&mut self, title: &str) {
        self.blank();
        let padded = format!(" {} ", title);
        self.line(&format!("{:=^w$}", padded, w = self.width));
    }

    fn dashes(&mut self, n: usize) {
        self.row("-".repeat(n));
    }

    fn finish(self) -> String {
        self.text
    }
}

/// Integer with thousands separators, e.g. 2640000 -> "2,640,000"
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn dollars(value: u32) -> String {
    format!("${}", thousands(u64::from(value)))
}

fn kw(value: impl Into<u64>) -> String {
    thousands(value.into())
}

fn pct(numerator: u32, denominator: u32) -> String {
    if denominator == 0 {
        return "-".to_string();
    }
    format!("{:.0}%", f64::from(numerator) / f64::from(denominator) * 100.0)
}

fn write_specifications(out: &mut ReportBuilder, r: &DesignReport) {
    out.section("SYSTEM SPECIFICATIONS");
    out.row(format!(
        "Net propulsion power:  {} kW ({} MW)",
        kw(r.power_chain.p_propulsion_kw),
        f64::from(r.power_chain.p_propulsion_kw) / 1000.0
    ));
    out.row(format!("Operational endurance: {} hours", r.storage.endurance_hours));
    out.row("Fuel:                  Green ammonia".to_string());
    out.row("Cracker mode:          Autothermal (GHC + HAVAC)".to_string());
}

fn write_power_chain(out: &mut ReportBuilder, r: &DesignReport) {
    let pc = &r.power_chain;
    out.section("TABLE 2: POWER REQUIREMENT CALCULATION");
    out.row(format!(
        "{:<30} {:<12} {:<12} {:<12}",
        "Component", "Efficiency", "Output (kW)", "Input (kW)"
    ));
    out.dashes(66);

    let rows = [
        ("Propeller shaft (target)", "-".to_string(), kw(pc.p_propulsion_kw), "-".to_string()),
        (
            "Electric motor",
            pct(pc.p_propulsion_kw, pc.p_motor_input_kw),
            kw(pc.p_propulsion_kw),
            kw(pc.p_motor_input_kw),
        ),
        (
            "Inverter",
            pct(pc.p_motor_input_kw, pc.p_inverter_input_kw),
            kw(pc.p_motor_input_kw),
            kw(pc.p_inverter_input_kw),
        ),
        (
            "Battery charging",
            "-".to_string(),
            kw(pc.p_inverter_input_kw),
            kw(pc.p_dc_bus_kw),
        ),
        (
            "DC/DC converter",
            pct(pc.p_dc_bus_kw, pc.p_dcdc_input_kw),
            kw(pc.p_dc_bus_kw),
            kw(pc.p_dcdc_input_kw),
        ),
        (
            "Balance of Plant",
            format!("{:.0}%", pc.bop_fraction * 100.0),
            "-".to_string(),
            format!("+{}", kw(pc.p_bop_kw)),
        ),
        ("FC gross output required", "-".to_string(), "-".to_string(), kw(pc.p_fc_gross_kw)),
    ];
    for (component, eff, output, input) in rows {
        out.row(format!("{:<30} {:<12} {:<12} {:<12}", component, eff, output, input));
    }

    out.blank();
    out.row(format!(
        "FC capacity: {} x {} kW = {} kW ({}% utilisation)",
        pc.fc_modules,
        pc.fc_module_power_kw,
        kw(pc.fc_capacity_kw),
        pc.fc_utilisation_pct
    ));
}

fn write_process_flow(out: &mut ReportBuilder, r: &DesignReport) {
    let h2 = &r.hydrogen;
    let nh3 = &r.ammonia;
    out.section("TABLE 3: PROCESS FLOW CALCULATIONS");
    out.row(format!(
        "{:<25} {:<12} {:<10} {:<10} {:<10}",
        "Stream", "Flow (kg/h)", "H2", "N2", "NH3"
    ));
    out.dashes(67);

    let feed = nh3.m_nh3_kg_h.to_string();
    let tail_total = h2.m_h2_psa_tail_kg_h + nh3.m_n2_kg_h;
    let rows = [
        ("NH3 Feed", feed.clone(), "-".to_string(), "-".to_string(), feed.clone()),
        (
            "Cracker Outlet",
            feed,
            format!("{:.1}", h2.m_h2_from_cracker_kg_h),
            format!("{:.1}", nh3.m_n2_kg_h),
            format!("{:.1}", nh3.m_nh3_slip_kg_h),
        ),
        (
            "PSA H2 Product",
            format!("{:.1}", h2.m_h2_fresh_kg_h),
            format!("{:.1}", h2.m_h2_fresh_kg_h),
            "trace".to_string(),
            "-".to_string(),
        ),
        (
            "PSA Tail Gas",
            format!("{:.1}", tail_total),
            format!("{:.1}", h2.m_h2_psa_tail_kg_h),
            format!("{:.1}", nh3.m_n2_kg_h),
            "-".to_string(),
        ),
        (
            "FC Anode Inlet",
            format!("{:.1}", h2.m_h2_inlet_kg_h),
            format!("{:.1}", h2.m_h2_inlet_kg_h),
            "trace".to_string(),
            "-".to_string(),
        ),
        (
            "Anode Purge",
            format!("{:.1}", h2.m_h2_purge_kg_h),
            format!("{:.1}", h2.m_h2_purge_kg_h),
            "trace".to_string(),
            "-".to_string(),
        ),
        (
            "To Combustor (total)",
            format!("{:.1}", h2.m_h2_to_combustor_kg_h),
            format!("{:.1}", h2.m_h2_to_combustor_kg_h),
            "-".to_string(),
            "-".to_string(),
        ),
    ];
    for (stream, flow, h, n, a) in rows {
        out.row(format!("{:<25} {:<12} {:<10} {:<10} {:<10}", stream, flow, h, n, a));
    }
    out.blank();
    out.row(format!("NH3 conversion: {}%", nh3.conversion_pct));
}

fn write_anode_recirculation(out: &mut ReportBuilder, r: &DesignReport) {
    let h2 = &r.hydrogen;
    out.section("TABLE 4: ANODE RECIRCULATION MASS BALANCE");
    out.row(format!("Fresh H2 feed (from PSA):    {} kg/h", h2.m_h2_fresh_kg_h));
    out.row(format!("Recycled H2 (from anode):    {} kg/h", h2.m_h2_recycle_kg_h));
    out.row(format!(
        "H2 at anode inlet (λ={}):   {} kg/h",
        h2.anode_stoichiometry, h2.m_h2_inlet_kg_h
    ));
    out.row(format!("H2 consumed (reaction):      {} kg/h", h2.m_h2_consumed_kg_h));
    out.row(format!("Anode exhaust:               {} kg/h", h2.m_h2_exhaust_kg_h));
    out.row(format!("Continuous purge to burner:  {} kg/h", h2.m_h2_purge_kg_h));
    out.row(format!(
        "Fuel utilisation: {}%   PSA recovery: {}%",
        h2.fuel_utilisation_pct, h2.psa_recovery_pct
    ));
}

fn write_autothermal(out: &mut ReportBuilder, r: &DesignReport) {
    let at = &r.autothermal;
    out.section("TABLE 5: AUTOTHERMAL HEAT REQUIREMENT");
    out.row(format!(
        "H2 to combustor (PSA tail + anode purge):  {} kg/h",
        at.h2_to_combustor_kg_h
    ));
    out.row(format!(
        "Combustion energy (LHV):                   {} kW",
        kw(at.combustion_energy_kw)
    ));
    out.row(format!(
        "Heat available ({}% burner efficiency):    {} kW",
        at.burner_efficiency_pct,
        kw(at.heat_available_kw)
    ));
    out.row(format!(
        "Cracker heat requirement (reaction):       {} kW",
        kw(at.cracker_requirement_kw)
    ));
    out.row(format!(
        "Heat losses:                               {} kW",
        kw(at.heat_losses_kw)
    ));
    out.row(format!(
        "Surplus heat:                              {} kW",
        kw(at.surplus_kw)
    ));
}

fn write_energy_balance(out: &mut ReportBuilder, r: &DesignReport) {
    let en = &r.energy;
    out.section("TABLE 6: ENERGY BALANCE");
    out.row(format!("{:<35} {:<15} {:<15}", "Energy Stream", "Power (kW)", "Percentage"));
    out.dashes(65);

    let rows = [
        ("Input: NH3 (LHV)", u64::from(en.e_input_kw)),
        ("Propulsion + Battery", u64::from(en.e_propulsion_battery_kw)),
        ("FC Waste Heat", u64::from(en.q_fc_waste_kw)),
        ("Combustor Excess Heat", u64::from(en.q_combustor_excess_kw)),
        ("Electronics Losses", u64::from(en.p_electronics_loss_kw)),
        ("Exhaust and Other", u64::from(en.e_exhaust_other_kw)),
        ("Total Output", en.output_sum()),
    ];
    for (stream, value) in rows {
        out.row(format!(
            "{:<35} {:<15} {:<15}",
            stream,
            format!("{} kW", kw(value)),
            format!("{:.1}%", en.share_pct(value))
        ));
    }
}

fn write_efficiency(out: &mut ReportBuilder, r: &DesignReport) {
    let eff = &r.efficiency;
    let en = &r.energy;
    out.section("SECTION 3.9: SYSTEM EFFICIENCY");
    out.row("η_system = P_useful / E_input".to_string());
    out.row("η_system = (P_propulsion + P_battery) / (ṁ_NH3 × LHV_NH3)".to_string());
    out.row(format!(
        "η_system = {} / {} = {} = {}% ≈ {}%",
        kw(en.e_propulsion_battery_kw),
        kw(en.e_input_kw),
        eff.eta_system,
        eff.eta_system_pct,
        eff.eta_rounded_pct
    ));
}

fn write_opex(out: &mut ReportBuilder, r: &DesignReport) {
    let ec = &r.economics;
    out.section("TABLE 7: OPEX CALCULATIONS (CORRECTED)");
    out.row(format!(
        "{:<30} {:<20} {:<20}",
        "Cost Component", "Green NH3", "Diesel Baseline"
    ));
    out.dashes(70);

    let carbon_label = format!("Carbon cost (${}/t CO2)", ec.carbon_price_per_tonne);
    let rows = [
        ("Fuel cost", ec.nh3_fuel_cost, ec.diesel_fuel_cost),
        (carbon_label.as_str(), ec.nh3_carbon_cost, ec.diesel_carbon_cost),
        ("Other costs", ec.nh3_other_cost, ec.diesel_other_cost),
        ("Total annual OPEX", ec.nh3_total_opex, ec.diesel_total_opex),
    ];
    for (component, nh3, diesel) in rows {
        out.row(format!("{:<30} {:<20} {:<20}", component, dollars(nh3), dollars(diesel)));
    }

    out.blank();
    out.row(format!(
        "Basis: {} h/yr, {} t NH3/yr at ${}/t (diesel ${}/t)",
        thousands(u64::from(ec.operating_hours_per_year)),
        thousands(u64::from(ec.annual_nh3_tonnes)),
        ec.ammonia_price_per_tonne,
        ec.diesel_price_per_tonne
    ));
    out.row(format!("Premium vs diesel: {}×", ec.opex_premium));
}

fn write_emissions(out: &mut ReportBuilder, r: &DesignReport) {
    let em = &r.emissions;
    let carbon_price = u64::from(r.economics.carbon_price_per_tonne);
    out.section("TABLE 8: LIFECYCLE EMISSION CALCULATIONS");
    out.row(format!(
        "{:<25} {:<15} {:<15} {:<15}",
        "Fuel Pathway", "CO2 (t/yr)", "vs Diesel", "Carbon Cost"
    ));
    out.dashes(70);

    let grey = format!("Grey NH3 (@{} CO2/t)", em.grey_co2_factor);
    let blue = format!("Blue NH3 (@{} CO2/t)", em.blue_co2_factor);
    let rows = [
        ("Diesel (baseline)", em.diesel_co2_t_yr, "-"),
        (grey.as_str(), em.grey_nh3_co2_t_yr, em.grey_vs_diesel.as_str()),
        (blue.as_str(), em.blue_nh3_co2_t_yr, em.blue_vs_diesel.as_str()),
        ("Green NH3", em.green_nh3_co2_t_yr, em.green_vs_diesel.as_str()),
    ];
    for (pathway, co2, versus) in rows {
        let co2 = u64::from(co2);
        out.row(format!(
            "{:<25} {:<15} {:<15} {:<15}",
            pathway,
            thousands(co2),
            versus,
            format!("${}", thousands(co2 * carbon_price))
        ));
    }
}

fn write_physical_constants(out: &mut ReportBuilder) {
    out.section("REFERENCE CONSTANTS");
    for (name, value, unit) in PHYSICAL_CONSTANTS {
        out.row(format!("{:<28} {:>10?} {}", name, value, unit));
    }
}

fn write_validation(out: &mut ReportBuilder, r: &DesignReport) {
    let v = &r.validation;
    out.section("VALIDATION");
    out.row(format!(
        "Energy balance:        {} kW in, {} kW out ({})",
        kw(v.energy_balance_input),
        kw(v.energy_balance_output),
        if v.energy_balance_ok { "closes" } else { "DOES NOT CLOSE" }
    ));
    out.row("Stated in report (not computed):".to_string());
    out.row(format!(
        "  Autothermal feasible: {}",
        if v.autothermal_feasible { "yes" } else { "no" }
    ));
    out.row(format!("  Autothermal margin:   {}", v.autothermal_margin));
    out.row(format!(
        "  All checks pass:      {}",
        if v.all_checks_pass { "yes" } else { "no" }
    ));
}

fn write_summary(out: &mut ReportBuilder, r: &DesignReport) {
    let pc = &r.power_chain;
    let ec = &r.economics;
    out.section("SUMMARY");
    out.row(format!("• NH3 consumption:     {} kg/h", r.ammonia.m_nh3_kg_h));
    out.row(format!(
        "• FC gross output:     {} kW ({} × {} kW at {}% utilisation)",
        kw(pc.p_fc_gross_kw),
        pc.fc_modules,
        pc.fc_module_power_kw,
        pc.fc_utilisation_pct
    ));
    out.row(format!("• Net propulsion:      {} kW", kw(pc.p_propulsion_kw)));
    out.row(format!(
        "• System efficiency:   {}% (LHV basis)",
        r.efficiency.eta_rounded_pct
    ));
    out.row(format!(
        "• Tank capacity:       ~{} tonnes ({}h + {}% margin)",
        r.storage.tank_capacity_tonnes, r.storage.endurance_hours, r.storage.buffer_pct
    ));
    out.row(format!(
        "• Autothermal margin:  {} ({} kW surplus)",
        r.validation.autothermal_margin,
        kw(r.autothermal.surplus_kw)
    ));
    out.row(format!(
        "• Annual OPEX:         ${:.2}M ({}× diesel)",
        f64::from(ec.nh3_total_opex) / 1_000_000.0,
        ec.opex_premium
    ));
    out.row(format!(
        "• Lifecycle CO2:       {} tonnes/year (green ammonia)",
        r.emissions.green_nh3_co2_t_yr
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tugboat_domain::TugboatCalculator;

    fn render() -> String {
        render_report(&TugboatCalculator::coursework().calculate(), 80)
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(2_640_000), "2,640,000");
    }

    #[test]
    fn test_section_banners_fill_width() {
        let text = render();
        let banner = text
            .lines()
            .find(|l| l.contains("TABLE 6: ENERGY BALANCE"))
            .unwrap();
        assert_eq!(banner.chars().count(), 80);
        assert!(banner.starts_with('='));
        assert!(banner.ends_with('='));
    }

    #[test]
    fn test_wider_report() {
        let text = render_report(&TugboatCalculator::coursework().calculate(), 100);
        assert!(text.lines().any(|l| l == "=".repeat(100)));
    }

    #[test]
    fn test_energy_percentages() {
        let text = render();
        assert!(text.contains("22.8%"));
        assert!(text.contains("36.1%"));
        assert!(text.contains("21.4%"));
        assert!(text.contains("1.9%"));
        assert!(text.contains("17.8%"));
    }

    #[test]
    fn test_power_chain_efficiencies() {
        let text = render();
        let motor = text.lines().find(|l| l.contains("Electric motor")).unwrap();
        assert!(motor.contains("98%"));
        let dcdc = text.lines().find(|l| l.contains("DC/DC converter")).unwrap();
        assert!(dcdc.contains("97%"));
    }

    #[test]
    fn test_opex_and_emissions_rows() {
        let text = render();
        assert!(text.contains("$2,640,000"));
        assert!(text.contains("$813,000"));
        assert!(text.contains("Premium vs diesel: 3.25×"));
        assert!(text.contains("$507,000"));
        assert!(text.contains("$53,400"));
    }

    #[test]
    fn test_validation_marks_editorial_claims() {
        let text = render_validation(&TugboatCalculator::coursework().calculate(), 80);
        assert!(text.contains("4,600 kW in, 4,600 kW out (closes)"));
        assert!(text.contains("Stated in report (not computed)"));
        assert!(text.contains("2.3×"));
    }

    #[test]
    fn test_reference_constants_keep_float_form() {
        let text = render();
        let rho = text.lines().find(|l| l.trim_start().starts_with("rho NH3")).unwrap();
        assert!(rho.contains("682.0 kg/m³"));
        let cracking = text.lines().find(|l| l.trim_start().starts_with("dH cracking")).unwrap();
        assert!(cracking.contains("46.0 kJ/mol"));
        let lhv = text.lines().find(|l| l.trim_start().starts_with("LHV H2")).unwrap();
        assert!(lhv.contains("33.33 kWh/kg"));
    }
}
