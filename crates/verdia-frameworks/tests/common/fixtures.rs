//! Expected framework sets for the seeded catalog.
//!
//! Kept in one place so the scenario tests state their expectations against
//! named constants instead of repeating code lists.

/// Nigerian frameworks for a manufacturing organization, in assignment
/// order.
pub const NIGERIA_MANUFACTURING: [&str; 3] = ["NESREA", "FMEnv", "NSE_ESG"];

/// Nigerian frameworks for an oil & gas organization, in assignment order.
pub const NIGERIA_OIL_GAS: [&str; 5] = ["NESREA", "DPR", "NUPRC", "FMEnv", "NSE_ESG"];

/// Nigerian frameworks for a finance organization, in assignment order.
pub const NIGERIA_FINANCE: [&str; 4] = ["NESREA", "CBN_ESG", "FMEnv", "NSE_ESG"];

/// Cross-sector international frameworks, in assignment order.
pub const INTERNATIONAL_CROSS_SECTOR: [&str; 8] = [
    "GRI", "ISSB", "TCFD", "SASB", "CDP", "UN_SDG", "ISO14001", "IFC_PS",
];

/// Collect assignment codes from borrowed frameworks or rows into owned
/// strings for comparison.
pub fn as_strings(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| (*c).to_string()).collect()
}
