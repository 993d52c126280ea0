//! Design tables of the coursework report
//!
//! Every field is serialized under the name used in the report, so the JSON
//! document keeps keys such as `P_propulsion_kW` and `E_input_kW`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tugboat_types::{Error, Result};

/// Table 2: power chain from propeller shaft back to fuel cell gross output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerChain {
    #[serde(rename = "P_propulsion_kW")]
    pub p_propulsion_kw: u32,
    #[serde(rename = "P_motor_input_kW")]
    pub p_motor_input_kw: u32,
    #[serde(rename = "P_inverter_input_kW")]
    pub p_inverter_input_kw: u32,
    #[serde(rename = "P_dc_bus_kW")]
    pub p_dc_bus_kw: u32,
    #[serde(rename = "P_dcdc_input_kW")]
    pub p_dcdc_input_kw: u32,
    #[serde(rename = "P_bop_kW")]
    pub p_bop_kw: u32,
    #[serde(rename = "P_fc_gross_kW")]
    pub p_fc_gross_kw: u32,
    pub bop_fraction: f64,
    #[serde(rename = "fc_capacity_kW")]
    pub fc_capacity_kw: u32,
    pub fc_modules: u32,
    #[serde(rename = "fc_module_power_kW")]
    pub fc_module_power_kw: u32,
    pub fc_utilisation_pct: u32,
}

/// Tables 3 and 4: hydrogen mass balance (kg/h)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hydrogen {
    pub m_h2_from_cracker_kg_h: f64,
    pub m_h2_fresh_kg_h: f64,
    pub m_h2_psa_tail_kg_h: f64,
    pub m_h2_inlet_kg_h: f64,
    pub m_h2_consumed_kg_h: f64,
    pub m_h2_exhaust_kg_h: f64,
    pub m_h2_recycle_kg_h: f64,
    pub m_h2_purge_kg_h: f64,
    pub m_h2_to_combustor_kg_h: f64,
    pub anode_stoichiometry: f64,
    pub fuel_utilisation_pct: u32,
    pub psa_recovery_pct: u32,
}

/// Ammonia feed and cracker outlet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ammonia {
    pub m_nh3_kg_h: u32,
    pub m_n2_kg_h: f64,
    pub m_nh3_slip_kg_h: f64,
    pub conversion_pct: f64,
}

/// Table 5: autothermal heat balance of the cracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Autothermal {
    pub h2_to_combustor_kg_h: f64,
    #[serde(rename = "combustion_energy_kW")]
    pub combustion_energy_kw: u32,
    #[serde(rename = "heat_available_kW")]
    pub heat_available_kw: u32,
    #[serde(rename = "cracker_requirement_kW")]
    pub cracker_requirement_kw: u32,
    #[serde(rename = "heat_losses_kW")]
    pub heat_losses_kw: u32,
    #[serde(rename = "surplus_kW")]
    pub surplus_kw: u32,
    pub burner_efficiency_pct: u32,
}

/// Table 6: energy balance, one input against five outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBalance {
    #[serde(rename = "E_input_kW")]
    pub e_input_kw: u32,
    #[serde(rename = "E_propulsion_battery_kW")]
    pub e_propulsion_battery_kw: u32,
    #[serde(rename = "Q_fc_waste_kW")]
    pub q_fc_waste_kw: u32,
    #[serde(rename = "Q_combustor_excess_kW")]
    pub q_combustor_excess_kw: u32,
    #[serde(rename = "P_electronics_loss_kW")]
    pub p_electronics_loss_kw: u32,
    #[serde(rename = "E_exhaust_other_kW")]
    pub e_exhaust_other_kw: u32,
}

impl EnergyBalance {
    /// Sum of the five output streams (kW), widened so it cannot overflow
    pub fn output_sum(&self) -> u64 {
        [
            self.e_propulsion_battery_kw,
            self.q_fc_waste_kw,
            self.q_combustor_excess_kw,
            self.p_electronics_loss_kw,
            self.e_exhaust_other_kw,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }

    /// Share of the input carried by a stream, in percent
    pub fn share_pct(&self, stream_kw: u64) -> f64 {
        if self.e_input_kw == 0 {
            return 0.0;
        }
        stream_kw as f64 / f64::from(self.e_input_kw) * 100.0
    }
}

/// Fuel storage sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub endurance_hours: u32,
    pub m_nh3_12h_kg: u32,
    pub buffer_pct: u32,
    pub m_nh3_total_kg: u32,
    pub tank_capacity_tonnes: u32,
    pub tank_volume_m3: f64,
}

/// Section 3.9: system efficiency (LHV basis)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Efficiency {
    pub eta_system: f64,
    pub eta_system_pct: f64,
    pub eta_rounded_pct: u32,
}

/// Table 7: annual operating cost, green ammonia against diesel (USD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Economics {
    pub operating_hours_per_year: u32,
    pub annual_nh3_tonnes: u32,
    pub nh3_fuel_cost: u32,
    pub nh3_carbon_cost: u32,
    pub nh3_other_cost: u32,
    pub nh3_total_opex: u32,
    pub diesel_fuel_cost: u32,
    pub diesel_carbon_cost: u32,
    pub diesel_other_cost: u32,
    pub diesel_total_opex: u32,
    pub opex_premium: f64,
    pub ammonia_price_per_tonne: u32,
    pub diesel_price_per_tonne: u32,
    pub carbon_price_per_tonne: u32,
}

/// Table 8: lifecycle CO2 emissions per fuel pathway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emissions {
    pub diesel_co2_t_yr: u32,
    pub grey_nh3_co2_t_yr: u32,
    pub blue_nh3_co2_t_yr: u32,
    pub green_nh3_co2_t_yr: u32,
    pub grey_co2_factor: f64,
    pub blue_co2_factor: f64,
    pub green_co2_factor: f64,
    pub diesel_co2_factor: f64,
    pub grey_vs_diesel: String,
    pub blue_vs_diesel: String,
    pub green_vs_diesel: String,
}

/// The nine design tables of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignValues {
    pub power_chain: PowerChain,
    pub hydrogen: Hydrogen,
    pub ammonia: Ammonia,
    pub autothermal: Autothermal,
    pub energy: EnergyBalance,
    pub storage: Storage,
    pub efficiency: Efficiency,
    pub economics: Economics,
    pub emissions: Emissions,
}

/// Name of one design table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignTable {
    PowerChain,
    Hydrogen,
    Ammonia,
    Autothermal,
    Energy,
    Storage,
    Efficiency,
    Economics,
    Emissions,
}

impl DesignTable {
    /// All tables in document order
    pub const ALL: [DesignTable; 9] = [
        DesignTable::PowerChain,
        DesignTable::Hydrogen,
        DesignTable::Ammonia,
        DesignTable::Autothermal,
        DesignTable::Energy,
        DesignTable::Storage,
        DesignTable::Efficiency,
        DesignTable::Economics,
        DesignTable::Emissions,
    ];

    /// Key of the table in the output document
    pub fn key(&self) -> &'static str {
        match self {
            DesignTable::PowerChain => "power_chain",
            DesignTable::Hydrogen => "hydrogen",
            DesignTable::Ammonia => "ammonia",
            DesignTable::Autothermal => "autothermal",
            DesignTable::Energy => "energy",
            DesignTable::Storage => "storage",
            DesignTable::Efficiency => "efficiency",
            DesignTable::Economics => "economics",
            DesignTable::Emissions => "emissions",
        }
    }

    /// Human-readable title, as used for sheet names and headings
    pub fn title(&self) -> &'static str {
        match self {
            DesignTable::PowerChain => "Power Chain",
            DesignTable::Hydrogen => "Hydrogen Balance",
            DesignTable::Ammonia => "Ammonia",
            DesignTable::Autothermal => "Autothermal",
            DesignTable::Energy => "Energy Balance",
            DesignTable::Storage => "Storage",
            DesignTable::Efficiency => "Efficiency",
            DesignTable::Economics => "Economics",
            DesignTable::Emissions => "Emissions",
        }
    }
}

impl fmt::Display for DesignTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DesignTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        DesignTable::ALL
            .into_iter()
            .find(|t| t.key() == normalized)
            .ok_or_else(|| Error::UnknownTable(s.to_string()))
    }
}

/// A single value looked up by field name
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .map(FieldValue::Integer)
                .or_else(|| n.as_f64().map(FieldValue::Float)),
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{}", i),
            // Keep the trailing ".0" so floats stay distinguishable from integers
            FieldValue::Float(x) => write!(f, "{:?}", x),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl DesignValues {
    /// Whole table as a JSON object, keyed by report field name
    pub fn table(&self, table: DesignTable) -> Result<Map<String, Value>> {
        let value = match table {
            DesignTable::PowerChain => serde_json::to_value(&self.power_chain)?,
            DesignTable::Hydrogen => serde_json::to_value(&self.hydrogen)?,
            DesignTable::Ammonia => serde_json::to_value(&self.ammonia)?,
            DesignTable::Autothermal => serde_json::to_value(&self.autothermal)?,
            DesignTable::Energy => serde_json::to_value(&self.energy)?,
            DesignTable::Storage => serde_json::to_value(&self.storage)?,
            DesignTable::Efficiency => serde_json::to_value(&self.efficiency)?,
            DesignTable::Economics => serde_json::to_value(&self.economics)?,
            DesignTable::Emissions => serde_json::to_value(&self.emissions)?,
        };

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(Error::UnknownTable(table.key().to_string())),
        }
    }

    /// Field names of a table, in declaration order
    pub fn field_names(&self, table: DesignTable) -> Result<Vec<String>> {
        Ok(self.table(table)?.keys().cloned().collect())
    }

    /// Look up one field by its report name
    pub fn field(&self, table: DesignTable, key: &str) -> Result<FieldValue> {
        let map = self.table(table)?;
        map.get(key)
            .and_then(FieldValue::from_json)
            .ok_or_else(|| Error::UnknownField {
                table: table.key().to_string(),
                field: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COURSEWORK;

    #[test]
    fn test_table_parse_accepts_key_and_dashes() {
        assert_eq!("power_chain".parse::<DesignTable>().unwrap(), DesignTable::PowerChain);
        assert_eq!("Power-Chain".parse::<DesignTable>().unwrap(), DesignTable::PowerChain);
        assert_eq!(" emissions ".parse::<DesignTable>().unwrap(), DesignTable::Emissions);
    }

    #[test]
    fn test_table_parse_rejects_unknown() {
        let err = "validation".parse::<DesignTable>().unwrap_err();
        assert!(matches!(err, Error::UnknownTable(ref t) if t == "validation"));
    }

    #[test]
    fn test_field_lookup_uses_report_names() {
        let v = COURSEWORK.field(DesignTable::Energy, "E_input_kW").unwrap();
        assert_eq!(v, FieldValue::Integer(4600));

        let v = COURSEWORK.field(DesignTable::PowerChain, "bop_fraction").unwrap();
        assert_eq!(v, FieldValue::Float(0.30));

        let v = COURSEWORK.field(DesignTable::Emissions, "grey_vs_diesel").unwrap();
        assert_eq!(v, FieldValue::Text("+141%".to_string()));
    }

    #[test]
    fn test_field_lookup_keeps_integral_floats_as_floats() {
        let v = COURSEWORK.field(DesignTable::Storage, "tank_volume_m3").unwrap();
        assert_eq!(v, FieldValue::Float(18.0));
        assert_eq!(v.to_string(), "18.0");
    }

    #[test]
    fn test_field_lookup_unknown_field() {
        let err = COURSEWORK.field(DesignTable::Energy, "e_input_kw").unwrap_err();
        assert!(matches!(err, Error::UnknownField { .. }));
    }

    #[test]
    fn test_field_names_in_declaration_order() {
        let names = COURSEWORK.field_names(DesignTable::Ammonia).unwrap();
        assert_eq!(
            names,
            vec!["m_nh3_kg_h", "m_n2_kg_h", "m_nh3_slip_kg_h", "conversion_pct"]
        );
    }

    #[test]
    fn test_energy_share() {
        let e = &COURSEWORK.energy;
        assert!((e.share_pct(u64::from(e.q_fc_waste_kw)) - 36.09).abs() < 0.01);
        assert!((e.share_pct(u64::from(e.e_input_kw)) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_output_sum_of_saturated_streams() {
        let e = EnergyBalance {
            e_input_kw: u32::MAX,
            e_propulsion_battery_kw: u32::MAX,
            q_fc_waste_kw: u32::MAX,
            q_combustor_excess_kw: u32::MAX,
            p_electronics_loss_kw: u32::MAX,
            e_exhaust_other_kw: u32::MAX,
        };
        assert_eq!(e.output_sum(), 5 * u64::from(u32::MAX));
    }
}
