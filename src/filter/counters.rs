//! Filter panel counters
//!
//! Counts unique wells in the active docket per status and type bucket,
//! producing the `"Oil Well (12)"` labels shown next to each checkbox.
//! Merged categories follow the panel layout: both injection types count
//! as Injection, dual-purpose wells count as Disposal, and the permit
//! administration tail counts as Misc/Other.

use serde::Serialize;
use std::collections::HashSet;

use crate::types::{StatusBucket, TypeBucket, WellRecord};

/// One checkbox label with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterEntry {
    pub key: String,
    pub label: String,
    pub count: usize,
}

/// Counter sets for the filter panel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocketCounters {
    pub by_status: Vec<CounterEntry>,
    pub by_type: Vec<CounterEntry>,
}

/// Count unique wells per bucket over the docket working rows.
pub fn count(wells: &[&WellRecord]) -> DocketCounters {
    // A well cited twice on the same docket still counts once
    let mut seen = HashSet::new();
    let unique: Vec<&WellRecord> = wells
        .iter()
        .filter(|w| seen.insert(w.api_number.as_str()))
        .copied()
        .collect();

    let by_status = StatusBucket::ALL
        .iter()
        .map(|bucket| {
            let n = unique.iter().filter(|w| w.status.bucket() == *bucket).count();
            CounterEntry {
                key: bucket.key().to_string(),
                label: format!("{} ({})", bucket.display_name(), n),
                count: n,
            }
        })
        .collect();

    let by_type = TypeBucket::ALL
        .iter()
        .map(|bucket| {
            let n = unique
                .iter()
                .filter(|w| w.well_type.bucket() == *bucket)
                .count();
            CounterEntry {
                key: bucket.key().to_string(),
                label: format!("{} ({})", bucket.display_name(), n),
                count: n,
            }
        })
        .collect();

    DocketCounters { by_status, by_type }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{WellStatus, WellType};

    fn well(api: &str, status: WellStatus, well_type: WellType) -> WellRecord {
        WellRecord {
            api_number: api.to_string(),
            name: api.to_string(),
            display_name: api.to_string(),
            operator: "OP".to_string(),
            work_type: "DRILL".to_string(),
            status,
            well_type,
            field_name: String::new(),
            elevation: 0.0,
            spud_date: String::new(),
            age_months: 0,
            board_year: 2024,
            docket_month: "March".to_string(),
            board_docket: "D".to_string(),
            conc_code: String::new(),
            mineral_lease: String::new(),
        }
    }

    #[test]
    fn merged_type_buckets() {
        let wells = vec![
            well("1", WellStatus::Producing, WellType::WaterInjection),
            well("2", WellStatus::Producing, WellType::GasInjection),
            well("3", WellStatus::Producing, WellType::OilAndDisposal),
            well("4", WellStatus::Producing, WellType::Oil),
        ];
        let refs: Vec<&WellRecord> = wells.iter().collect();
        let counters = count(&refs);

        let injection = counters.by_type.iter().find(|e| e.key == "injection").unwrap();
        assert_eq!(injection.count, 2);
        assert_eq!(injection.label, "Injection Well (2)");

        let disposal = counters.by_type.iter().find(|e| e.key == "disposal").unwrap();
        assert_eq!(disposal.count, 1);
    }

    #[test]
    fn permit_tail_counts_as_misc() {
        let wells = vec![
            well("1", WellStatus::ApprovedPermit, WellType::Oil),
            well("2", WellStatus::Inactive, WellType::Oil),
            well("3", WellStatus::Producing, WellType::Oil),
        ];
        let refs: Vec<&WellRecord> = wells.iter().collect();
        let counters = count(&refs);
        let other = counters.by_status.iter().find(|e| e.key == "other").unwrap();
        assert_eq!(other.count, 2);
        assert_eq!(other.label, "Misc (2)");
    }

    #[test]
    fn duplicate_citations_count_once() {
        let wells = vec![
            well("1", WellStatus::Producing, WellType::Oil),
            well("1", WellStatus::Producing, WellType::Oil),
        ];
        let refs: Vec<&WellRecord> = wells.iter().collect();
        let counters = count(&refs);
        let producing = counters
            .by_status
            .iter()
            .find(|e| e.key == "producing")
            .unwrap();
        assert_eq!(producing.count, 1);
    }
}
