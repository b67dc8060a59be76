//! Production record aggregation
//!
//! Turns a well's monthly production rows into the dual-panel series the
//! dashboard plots: potential profit and produced volume, each with a
//! monthly and a running-cumulative curve. Cumulative columns are always
//! recomputed here; stored cumulatives are not trusted.

use serde::Serialize;

use crate::ingest::WellDataset;
use crate::types::{ProductionPhase, ProductionRecord};

// ============================================================================
// Series types
// ============================================================================

/// One plotted curve.
#[derive(Debug, Clone, Serialize)]
pub struct Curve {
    pub label: String,
    pub values: Vec<f64>,
}

/// The assembled production chart data for one well and phase.
#[derive(Debug, Clone, Serialize)]
pub struct ProductionSeries {
    pub api_number: String,
    pub phase: ProductionPhase,
    /// Month axis, `YYYY-MM`, ascending
    pub months: Vec<String>,
    /// Monthly and cumulative potential profit (USD)
    pub profit: Curve,
    pub profit_cumulative: Curve,
    /// Monthly and cumulative produced volume, in the phase unit
    pub volume: Curve,
    pub volume_cumulative: Curve,
    pub volume_unit: &'static str,
    /// Hint for axis tick density; capped at 10 like the original plots
    pub tick_hint: usize,
}

impl ProductionSeries {
    /// An empty series for wells without production history.
    fn empty(api_number: &str, phase: ProductionPhase) -> Self {
        Self {
            api_number: api_number.to_string(),
            phase,
            months: Vec::new(),
            profit: Curve {
                label: monthly_profit_label(phase),
                values: Vec::new(),
            },
            profit_cumulative: Curve {
                label: cumulative_profit_label(phase),
                values: Vec::new(),
            },
            volume: Curve {
                label: monthly_volume_label(phase),
                values: Vec::new(),
            },
            volume_cumulative: Curve {
                label: cumulative_volume_label(phase),
                values: Vec::new(),
            },
            volume_unit: phase.volume_unit(),
            tick_hint: 0,
        }
    }
}

fn monthly_profit_label(phase: ProductionPhase) -> String {
    match phase {
        ProductionPhase::Oil => "Monthly Oil Profit".to_string(),
        ProductionPhase::Gas => "Monthly Gas Profit".to_string(),
    }
}

fn cumulative_profit_label(phase: ProductionPhase) -> String {
    match phase {
        ProductionPhase::Oil => "Cumulative Oil Profit".to_string(),
        ProductionPhase::Gas => "Cumulative Gas Profit".to_string(),
    }
}

fn monthly_volume_label(phase: ProductionPhase) -> String {
    match phase {
        ProductionPhase::Oil => "Monthly Oil Production".to_string(),
        ProductionPhase::Gas => "Monthly Gas Production".to_string(),
    }
}

fn cumulative_volume_label(phase: ProductionPhase) -> String {
    match phase {
        ProductionPhase::Oil => "Cumulative Oil Production".to_string(),
        ProductionPhase::Gas => "Cumulative Gas Production".to_string(),
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Build the production series for a well.
pub fn series_for(
    dataset: &WellDataset,
    api_number: &str,
    phase: ProductionPhase,
) -> ProductionSeries {
    match dataset.production.get(api_number) {
        Some(records) => assemble(api_number, phase, records),
        None => ProductionSeries::empty(api_number, phase),
    }
}

fn assemble(
    api_number: &str,
    phase: ProductionPhase,
    records: &[ProductionRecord],
) -> ProductionSeries {
    // Records arrive deduplicated and month-sorted from ingest
    let months: Vec<String> = records.iter().map(|r| r.month.clone()).collect();

    let (monthly_volume, monthly_profit): (Vec<f64>, Vec<f64>) = records
        .iter()
        .map(|r| match phase {
            ProductionPhase::Oil => (r.oil_bbl, r.oil_profit),
            ProductionPhase::Gas => (r.gas_mcf, r.gas_profit),
        })
        .unzip();

    let tick_hint = months.len().min(10);

    ProductionSeries {
        api_number: api_number.to_string(),
        phase,
        profit_cumulative: Curve {
            label: cumulative_profit_label(phase),
            values: running_sum(&monthly_profit),
        },
        volume_cumulative: Curve {
            label: cumulative_volume_label(phase),
            values: running_sum(&monthly_volume),
        },
        profit: Curve {
            label: monthly_profit_label(phase),
            values: monthly_profit,
        },
        volume: Curve {
            label: monthly_volume_label(phase),
            values: monthly_volume,
        },
        volume_unit: phase.volume_unit(),
        months,
        tick_hint,
    }
}

fn running_sum(values: &[f64]) -> Vec<f64> {
    let mut sum = 0.0;
    values
        .iter()
        .map(|v| {
            sum += v;
            sum
        })
        .collect()
}

/// Axis label formatter: values at or above one million render as `N.nM`.
pub fn format_axis_value(value: f64) -> String {
    if value.abs() >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else {
        format!("{value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(month: &str, oil: f64, gas: f64) -> ProductionRecord {
        ProductionRecord {
            api_number: "A".to_string(),
            month: month.to_string(),
            oil_bbl: oil,
            gas_mcf: gas,
            oil_profit: oil * 75.0,
            gas_profit: gas * 3.4,
        }
    }

    fn dataset_with(records: Vec<ProductionRecord>) -> WellDataset {
        let mut production = HashMap::new();
        production.insert("A".to_string(), records);
        WellDataset {
            wells: Vec::new(),
            trajectories: HashMap::new(),
            plats: Vec::new(),
            fields: Vec::new(),
            field_adjacency: Vec::new(),
            ownership: Vec::new(),
            board_matters: Vec::new(),
            production,
            fingerprint: String::new(),
            loaded_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn cumulative_curves_are_running_sums() {
        let ds = dataset_with(vec![
            record("2024-01", 100.0, 500.0),
            record("2024-02", 50.0, 400.0),
            record("2024-03", 25.0, 300.0),
        ]);
        let series = series_for(&ds, "A", ProductionPhase::Oil);
        assert_eq!(series.months, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(series.volume.values, vec![100.0, 50.0, 25.0]);
        assert_eq!(series.volume_cumulative.values, vec![100.0, 150.0, 175.0]);
        assert_eq!(series.volume_unit, "bbl");
        assert_eq!(series.profit.label, "Monthly Oil Profit");
    }

    #[test]
    fn gas_phase_uses_gas_columns() {
        let ds = dataset_with(vec![record("2024-01", 100.0, 500.0)]);
        let series = series_for(&ds, "A", ProductionPhase::Gas);
        assert_eq!(series.volume.values, vec![500.0]);
        assert_eq!(series.volume_unit, "mcf");
        assert!((series.profit.values[0] - 1700.0).abs() < 1e-9);
    }

    #[test]
    fn missing_well_yields_empty_series() {
        let ds = dataset_with(Vec::new());
        let series = series_for(&ds, "UNKNOWN", ProductionPhase::Oil);
        assert!(series.months.is_empty());
        assert_eq!(series.tick_hint, 0);
    }

    #[test]
    fn tick_hint_caps_at_ten() {
        let records: Vec<ProductionRecord> = (1..=24)
            .map(|m| record(&format!("2023-{:02}", (m % 12) + 1), 10.0, 10.0))
            .collect();
        // Months collide above; build directly to keep 24 entries
        let series = assemble("A", ProductionPhase::Oil, &records);
        assert_eq!(series.tick_hint, 10);
    }

    #[test]
    fn axis_formatter_switches_at_a_million() {
        assert_eq!(format_axis_value(999_999.0), "999999");
        assert_eq!(format_axis_value(1_500_000.0), "1.5M");
        assert_eq!(format_axis_value(-2_000_000.0), "-2.0M");
        assert_eq!(format_axis_value(42.4), "42");
    }
}
