//! Interaction session state
//!
//! The headless counterpart of the desktop shell: one session holds the
//! filter state and the selected board cause, and its mutation methods
//! follow the original cascade. Selecting a year clears the month and
//! docket below it; selecting a docket clears the well selection; filter
//! toggles leave the selection alone and only restyle.
//!
//! Shared as `Arc<RwLock<SessionState>>` between API handlers.

use serde::Serialize;

use crate::filter::FilterState;
use crate::ingest::WellDataset;

/// The mutable interaction state behind the API.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub filter: FilterState,
    /// Board cause highlighted on the map, if any
    pub selected_cause: Option<String>,
}

/// What repopulates after a cascade step; mirrors the combo box refreshes.
#[derive(Debug, Clone, Serialize)]
pub struct CascadeRefresh {
    pub months: Vec<String>,
    pub dockets: Vec<String>,
    pub operators: Vec<String>,
    pub wells: Vec<String>,
}

impl SessionState {
    /// Select a board year; everything below it resets.
    pub fn select_year(&mut self, dataset: &WellDataset, year: i32) -> CascadeRefresh {
        self.filter.year = Some(year);
        self.filter.month = None;
        self.filter.docket = None;
        self.filter.selected_well = None;
        self.selected_cause = None;
        CascadeRefresh {
            months: dataset.months_for(year),
            dockets: Vec::new(),
            operators: Vec::new(),
            wells: Vec::new(),
        }
    }

    /// Select a docket month within the current year.
    pub fn select_month(&mut self, dataset: &WellDataset, month: String) -> CascadeRefresh {
        let dockets = self
            .filter
            .year
            .map(|y| dataset.dockets_for(y, &month))
            .unwrap_or_default();
        self.filter.month = Some(month);
        self.filter.docket = None;
        self.filter.selected_well = None;
        self.selected_cause = None;
        CascadeRefresh {
            months: Vec::new(),
            dockets,
            operators: Vec::new(),
            wells: Vec::new(),
        }
    }

    /// Select a docket; repopulates the operator and well pick lists.
    pub fn select_docket(&mut self, dataset: &WellDataset, docket: String) -> CascadeRefresh {
        self.filter.docket = Some(docket);
        self.filter.selected_well = None;
        self.filter.operators.clear();
        CascadeRefresh {
            months: Vec::new(),
            dockets: Vec::new(),
            operators: self.docket_operators(dataset),
            wells: self.docket_well_names(dataset),
        }
    }

    /// Replace the filter toggles wholesale; the docket cascade fields in
    /// the incoming state are ignored so toggling can never jump dockets.
    pub fn apply_filters(&mut self, filters: FilterState) {
        let FilterState {
            operators,
            type_toggles,
            status_toggles,
            mode,
            age_window,
            show_field_labels,
            show_section_labels,
            selected_well,
            ..
        } = filters;
        self.filter.operators = operators;
        self.filter.type_toggles = type_toggles;
        self.filter.status_toggles = status_toggles;
        self.filter.mode = mode;
        self.filter.age_window = age_window;
        self.filter.show_field_labels = show_field_labels;
        self.filter.show_section_labels = show_section_labels;
        self.filter.selected_well = selected_well;
    }

    /// Working rows for the current docket selection.
    pub fn docket_wells<'a>(&self, dataset: &'a WellDataset) -> Vec<&'a crate::types::WellRecord> {
        match (&self.filter.year, &self.filter.month, &self.filter.docket) {
            (Some(year), Some(month), Some(docket)) => {
                dataset.wells_for_docket(*year, month, docket)
            }
            _ => Vec::new(),
        }
    }

    /// Distinct operators on the current docket, sorted.
    pub fn docket_operators(&self, dataset: &WellDataset) -> Vec<String> {
        let mut operators: Vec<String> = self
            .docket_wells(dataset)
            .iter()
            .map(|w| w.operator.clone())
            .collect();
        operators.sort_unstable();
        operators.dedup();
        operators
    }

    /// Display names for the docket well pick list, sorted, deduplicated.
    pub fn docket_well_names(&self, dataset: &WellDataset) -> Vec<String> {
        let mut names: Vec<String> = self
            .docket_wells(dataset)
            .iter()
            .map(|w| w.display_name.clone())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::HighlightMode;
    use crate::ingest::{build_dataset, synthetic, LoadOptions};
    use crate::types::TypeBucket;

    fn dataset() -> WellDataset {
        let tables = synthetic::generate(&synthetic::SyntheticConfig::default());
        build_dataset(tables, LoadOptions::default()).expect("synthetic basin builds")
    }

    #[test]
    fn year_selection_resets_the_cascade() {
        let ds = dataset();
        let mut session = SessionState::default();

        let refresh = session.select_year(&ds, 2024);
        assert!(!refresh.months.is_empty());

        let month = refresh.months[0].clone();
        let refresh = session.select_month(&ds, month);
        assert!(!refresh.dockets.is_empty());

        let refresh = session.select_docket(&ds, refresh.dockets[0].clone());
        assert!(!refresh.operators.is_empty());
        assert!(!refresh.wells.is_empty());

        // Re-selecting the year clears month and docket again
        session.select_year(&ds, 2024);
        assert!(session.filter.month.is_none());
        assert!(session.filter.docket.is_none());
        assert!(session.docket_wells(&ds).is_empty());
    }

    #[test]
    fn apply_filters_cannot_move_the_docket() {
        let ds = dataset();
        let mut session = SessionState::default();
        session.select_year(&ds, 2024);
        let month = ds.months_for(2024)[0].clone();
        session.select_month(&ds, month.clone());
        let docket = ds.dockets_for(2024, &month)[0].clone();
        session.select_docket(&ds, docket.clone());

        let mut incoming = FilterState::default();
        incoming.year = Some(1999);
        incoming.docket = Some("bogus".to_string());
        incoming.mode = HighlightMode::ByType;
        incoming.type_toggles.insert(TypeBucket::Gas);
        session.apply_filters(incoming);

        assert_eq!(session.filter.year, Some(2024));
        assert_eq!(session.filter.docket.as_deref(), Some(docket.as_str()));
        assert!(session.filter.type_toggles.contains(&TypeBucket::Gas));
    }

    #[test]
    fn docket_operators_are_sorted_unique() {
        let ds = dataset();
        let mut session = SessionState::default();
        session.select_year(&ds, 2024);
        let month = ds.months_for(2024)[0].clone();
        session.select_month(&ds, month.clone());
        let docket = ds.dockets_for(2024, &month)[0].clone();
        session.select_docket(&ds, docket);

        let operators = session.docket_operators(&ds);
        let mut sorted = operators.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(operators, sorted);
    }
}
