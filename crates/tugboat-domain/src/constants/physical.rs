//! Thermodynamic and physical constants quoted by the report

/// Lower heating value of hydrogen (kWh/kg)
pub const LHV_H2_KWH_KG: f64 = 33.33;

/// Lower heating value of ammonia (kWh/kg)
pub const LHV_NH3_KWH_KG: f64 = 5.17;

/// Molar mass of ammonia (g/mol)
pub const MW_NH3: f64 = 17.03;

/// Molar mass of hydrogen (g/mol)
pub const MW_H2: f64 = 2.016;

/// Molar mass of nitrogen (g/mol)
pub const MW_N2: f64 = 28.01;

/// Liquid ammonia density at -33 °C (kg/m³)
pub const RHO_NH3_LIQUID: f64 = 682.0;

/// Enthalpy of ammonia cracking (kJ/mol NH3)
pub const DELTA_H_CRACKING: f64 = 46.0;

/// Name, value and unit of every constant, in the order they are reported
pub const PHYSICAL_CONSTANTS: [(&str, f64, &str); 7] = [
    ("LHV H2", LHV_H2_KWH_KG, "kWh/kg"),
    ("LHV NH3", LHV_NH3_KWH_KG, "kWh/kg"),
    ("MW NH3", MW_NH3, "g/mol"),
    ("MW H2", MW_H2, "g/mol"),
    ("MW N2", MW_N2, "g/mol"),
    ("rho NH3 (liquid, -33 °C)", RHO_NH3_LIQUID, "kg/m³"),
    ("dH cracking", DELTA_H_CRACKING, "kJ/mol"),
];
