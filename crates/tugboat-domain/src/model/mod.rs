//! Domain models

pub mod report;
pub mod tables;

pub use report::{DesignReport, EditorialClaims, EnergyBalanceCheck, Validation};
pub use tables::{
    Ammonia, Autothermal, DesignTable, DesignValues, Economics, Efficiency, Emissions,
    EnergyBalance, FieldValue, Hydrogen, PowerChain, Storage,
};
