//! Monthly production records

use serde::{Deserialize, Serialize};

/// One month of reported production for a well.
///
/// Cumulative columns from the store are ignored; running sums are
/// recomputed from the monthly values when a series is assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub api_number: String,
    /// Reporting month, `YYYY-MM`
    pub month: String,
    /// Oil volume (bbl)
    pub oil_bbl: f64,
    /// Gas volume (mcf)
    pub gas_mcf: f64,
    /// Potential oil revenue for the month (USD)
    pub oil_profit: f64,
    /// Potential gas revenue for the month (USD)
    pub gas_profit: f64,
}

/// Which production phase a series is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionPhase {
    Oil,
    Gas,
}

impl ProductionPhase {
    /// Axis unit for the volume curve.
    pub fn volume_unit(&self) -> &'static str {
        match self {
            Self::Oil => "bbl",
            Self::Gas => "mcf",
        }
    }
}
