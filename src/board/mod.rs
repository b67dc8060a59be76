//! Board matter navigation and cross-referencing
//!
//! Resolves causes by docket or by section, extracts cause numbers from
//! pick-list labels, and flags the wells a matter cites so clients can
//! bold them.

use serde::Serialize;
use std::sync::OnceLock;

use crate::ingest::WellDataset;
use crate::types::{BoardDocLink, BoardMatter};

// ============================================================================
// Cause number extraction
// ============================================================================

/// Pull a cause number out of a display label such as
/// `"Cause No. 139-32 (2024)"` or `"Docket 2024-03 - Cause Number: 139-32"`.
pub fn extract_cause_number(text: &str) -> Option<String> {
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        regex::Regex::new(r"Cause (?:No\.|Number:?)\s*([0-9A-Za-z-]+)")
            .expect("cause number pattern is valid")
    });
    re.captures(text).map(|caps| caps[1].to_string())
}

// ============================================================================
// Lookup
// ============================================================================

/// Matters heard on a given board year and docket month.
pub fn matters_for_docket<'a>(
    dataset: &'a WellDataset,
    year: i32,
    month: &str,
) -> Vec<&'a BoardMatter> {
    dataset
        .board_matters
        .iter()
        .filter(|m| m.board_year == year && m.docket_month == month)
        .collect()
}

/// Matters touching a specific section, the section-search mode.
pub fn matters_for_section<'a>(dataset: &'a WellDataset, conc: &str) -> Vec<&'a BoardMatter> {
    dataset
        .board_matters
        .iter()
        .filter(|m| m.sections.iter().any(|s| s == conc))
        .collect()
}

/// API numbers of docket wells whose surface section a matter touches.
/// Clients bold these in pick lists.
pub fn cited_wells(dataset: &WellDataset, matter: &BoardMatter) -> Vec<String> {
    let mut apis: Vec<String> = dataset
        .wells
        .iter()
        .filter(|w| !w.conc_code.is_empty() && matter.sections.contains(&w.conc_code))
        .map(|w| w.api_number.clone())
        .collect();
    apis.sort_unstable();
    apis.dedup();
    apis
}

// ============================================================================
// API payloads
// ============================================================================

/// Pick-list entry for a matter.
#[derive(Debug, Clone, Serialize)]
pub struct BoardMatterSummary {
    pub cause_number: String,
    pub label: String,
    pub order_type: String,
    pub section_count: usize,
}

impl From<&BoardMatter> for BoardMatterSummary {
    fn from(matter: &BoardMatter) -> Self {
        Self {
            cause_number: matter.cause_number.clone(),
            label: matter.display_label(),
            order_type: matter.order_type.clone(),
            section_count: matter.sections.len(),
        }
    }
}

/// Full detail for a selected matter.
#[derive(Debug, Clone, Serialize)]
pub struct BoardMatterDetail {
    pub cause_number: String,
    pub quip: String,
    pub order_type: String,
    pub effective_date: String,
    pub end_date: String,
    pub board_year: i32,
    pub docket_month: String,
    pub sections: Vec<String>,
    pub links: Vec<BoardDocLink>,
    /// Docket wells to bold in pick lists
    pub cited_wells: Vec<String>,
}

/// Assemble the detail payload for a cause, if it exists.
pub fn matter_detail(dataset: &WellDataset, cause_number: &str) -> Option<BoardMatterDetail> {
    let matter = dataset.board_matter(cause_number)?;
    Some(BoardMatterDetail {
        cause_number: matter.cause_number.clone(),
        quip: matter.quip.clone(),
        order_type: matter.order_type.clone(),
        effective_date: matter.effective_date.clone(),
        end_date: matter.end_date.clone(),
        board_year: matter.board_year,
        docket_month: matter.docket_month.clone(),
        sections: matter.sections.clone(),
        links: matter.links.clone(),
        cited_wells: cited_wells(dataset, matter),
    })
}
