//! Aggregate output document and its validation block

use serde::{Deserialize, Serialize};

use super::tables::{
    Ammonia, Autothermal, DesignValues, Economics, Efficiency, Emissions, EnergyBalance, Hydrogen,
    PowerChain, Storage,
};

/// Outcome of the energy-balance closure check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyBalanceCheck {
    /// `E_input_kW`
    pub input_kw: u64,
    /// Sum of the five output streams
    pub output_kw: u64,
}

impl EnergyBalanceCheck {
    pub fn from_balance(energy: &EnergyBalance) -> Self {
        Self {
            input_kw: u64::from(energy.e_input_kw),
            output_kw: energy.output_sum(),
        }
    }

    pub fn closes(&self) -> bool {
        self.input_kw == self.output_kw
    }
}

/// Conclusions stated by the report that are not derived from any table.
///
/// These are carried into the validation block verbatim. Whether
/// `autothermal_feasible` and `all_checks_pass` should instead be computed
/// from the autothermal and energy tables is unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorialClaims {
    pub autothermal_feasible: bool,
    pub autothermal_margin: &'static str,
    pub all_checks_pass: bool,
}

/// Validation block of the output document.
///
/// Only the three `energy_balance_*` fields are computed. The remaining
/// fields come from [`EditorialClaims`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub energy_balance_input: u64,
    pub energy_balance_output: u64,
    pub energy_balance_ok: bool,
    pub autothermal_feasible: bool,
    pub autothermal_margin: String,
    pub all_checks_pass: bool,
}

impl Validation {
    pub fn new(check: EnergyBalanceCheck, claims: &EditorialClaims) -> Self {
        Self {
            energy_balance_input: check.input_kw,
            energy_balance_output: check.output_kw,
            energy_balance_ok: check.closes(),
            autothermal_feasible: claims.autothermal_feasible,
            autothermal_margin: claims.autothermal_margin.to_string(),
            all_checks_pass: claims.all_checks_pass,
        }
    }
}

/// Complete output document: nine tables plus validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub power_chain: PowerChain,
    pub hydrogen: Hydrogen,
    pub ammonia: Ammonia,
    pub autothermal: Autothermal,
    pub energy: EnergyBalance,
    pub storage: Storage,
    pub efficiency: Efficiency,
    pub economics: Economics,
    pub emissions: Emissions,
    pub validation: Validation,
}

impl DesignReport {
    pub fn new(values: &DesignValues, validation: Validation) -> Self {
        Self {
            power_chain: values.power_chain.clone(),
            hydrogen: values.hydrogen.clone(),
            ammonia: values.ammonia.clone(),
            autothermal: values.autothermal.clone(),
            energy: values.energy.clone(),
            storage: values.storage.clone(),
            efficiency: values.efficiency.clone(),
            economics: values.economics.clone(),
            emissions: values.emissions.clone(),
            validation,
        }
    }

    /// The nine tables without the validation block
    pub fn values(&self) -> DesignValues {
        DesignValues {
            power_chain: self.power_chain.clone(),
            hydrogen: self.hydrogen.clone(),
            ammonia: self.ammonia.clone(),
            autothermal: self.autothermal.clone(),
            energy: self.energy.clone(),
            storage: self.storage.clone(),
            efficiency: self.efficiency.clone(),
            economics: self.economics.clone(),
            emissions: self.emissions.clone(),
        }
    }
}
