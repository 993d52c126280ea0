//! Design values of the coursework report
//!
//! These are the authoritative figures returned by the calculator. Nothing
//! here is derived at runtime; the table is built once and never mutated.

use crate::model::{
    Ammonia, Autothermal, DesignValues, Economics, EditorialClaims, Efficiency, Emissions,
    EnergyBalance, Hydrogen, PowerChain, Storage,
};
use std::sync::LazyLock;

/// Report conclusions carried into the validation block as stated
pub const EDITORIAL_CLAIMS: EditorialClaims = EditorialClaims {
    autothermal_feasible: true,
    autothermal_margin: "2.3×",
    all_checks_pass: true,
};

/// All nine design tables
pub static COURSEWORK: LazyLock<DesignValues> = LazyLock::new(|| DesignValues {
    // Table 2
    power_chain: PowerChain {
        p_propulsion_kw: 1000,
        p_motor_input_kw: 1020,
        p_inverter_input_kw: 1074,
        p_dc_bus_kw: 1124,
        p_dcdc_input_kw: 1160,
        p_bop_kw: 500,
        p_fc_gross_kw: 1660,
        bop_fraction: 0.30,
        fc_capacity_kw: 2000,
        fc_modules: 10,
        fc_module_power_kw: 200,
        fc_utilisation_pct: 83,
    },

    // Tables 3, 4
    hydrogen: Hydrogen {
        m_h2_from_cracker_kg_h: 156.2,
        m_h2_fresh_kg_h: 117.2,
        m_h2_psa_tail_kg_h: 39.0,
        m_h2_inlet_kg_h: 129.5,
        m_h2_consumed_kg_h: 99.6,
        m_h2_exhaust_kg_h: 29.9,
        m_h2_recycle_kg_h: 12.3,
        m_h2_purge_kg_h: 17.5,
        m_h2_to_combustor_kg_h: 56.5,
        anode_stoichiometry: 1.3,
        fuel_utilisation_pct: 85,
        psa_recovery_pct: 75,
    },

    ammonia: Ammonia {
        m_nh3_kg_h: 890,
        m_n2_kg_h: 729.4,
        m_nh3_slip_kg_h: 4.4,
        conversion_pct: 99.5,
    },

    // Table 5
    autothermal: Autothermal {
        h2_to_combustor_kg_h: 56.5,
        combustion_energy_kw: 1883,
        heat_available_kw: 1695,
        cracker_requirement_kw: 668,
        heat_losses_kw: 67,
        surplus_kw: 960,
        burner_efficiency_pct: 90,
    },

    // Table 6
    energy: EnergyBalance {
        e_input_kw: 4600,
        e_propulsion_battery_kw: 1050,
        q_fc_waste_kw: 1660,
        q_combustor_excess_kw: 983,
        p_electronics_loss_kw: 88,
        e_exhaust_other_kw: 819,
    },

    storage: Storage {
        endurance_hours: 12,
        m_nh3_12h_kg: 10680,
        buffer_pct: 15,
        m_nh3_total_kg: 12282,
        tank_capacity_tonnes: 13,
        tank_volume_m3: 18.0,
    },

    efficiency: Efficiency {
        eta_system: 0.228,
        eta_system_pct: 22.8,
        eta_rounded_pct: 23,
    },

    // Table 7, with the "other costs" typo in the report corrected
    economics: Economics {
        operating_hours_per_year: 3000,
        annual_nh3_tonnes: 2670,
        nh3_fuel_cost: 2_400_000,
        nh3_carbon_cost: 0,
        nh3_other_cost: 240_000,
        nh3_total_opex: 2_640_000,
        diesel_fuel_cost: 528_000,
        diesel_carbon_cost: 211_000,
        diesel_other_cost: 74_000,
        diesel_total_opex: 813_000,
        opex_premium: 3.25,
        ammonia_price_per_tonne: 900,
        diesel_price_per_tonne: 800,
        carbon_price_per_tonne: 100,
    },

    // Table 8
    emissions: Emissions {
        diesel_co2_t_yr: 2110,
        grey_nh3_co2_t_yr: 5070,
        blue_nh3_co2_t_yr: 534,
        green_nh3_co2_t_yr: 0,
        grey_co2_factor: 1.9,
        blue_co2_factor: 0.2,
        green_co2_factor: 0.0,
        diesel_co2_factor: 3.2,
        grey_vs_diesel: "+141%".to_string(),
        blue_vs_diesel: "-75%".to_string(),
        green_vs_diesel: "-100%".to_string(),
    },
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_balance_literals_close() {
        assert_eq!(COURSEWORK.energy.output_sum(), 4600);
        assert_eq!(COURSEWORK.energy.e_input_kw, 4600);
    }

    #[test]
    fn test_corrected_opex() {
        let ec = &COURSEWORK.economics;
        assert_eq!(ec.nh3_other_cost, 240_000);
        assert_eq!(ec.nh3_total_opex, 2_640_000);
        assert_eq!(ec.opex_premium, 3.25);
    }

    #[test]
    fn test_static_is_shared() {
        let a: &DesignValues = &COURSEWORK;
        let b: &DesignValues = &COURSEWORK;
        assert!(std::ptr::eq(a, b));
    }
}
