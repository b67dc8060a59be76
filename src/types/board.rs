//! Board matter records
//!
//! A board matter is an administrative cause heard by the oil and gas board:
//! spacing orders, pooling orders, enforcement actions. Each cause touches a
//! set of TRS sections and may cite wells in the active docket.

use serde::{Deserialize, Serialize};

/// One administrative cause before the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardMatter {
    /// Cause number, e.g. `"139-32"`
    pub cause_number: String,
    /// One-line summary of the matter
    pub quip: String,
    /// Order classification, e.g. "Spacing", "Pooling"
    pub order_type: String,
    /// `YYYY-MM-DD`, empty when not yet effective
    #[serde(default)]
    pub effective_date: String,
    #[serde(default)]
    pub end_date: String,
    pub board_year: i32,
    pub docket_month: String,
    /// TRS concentration codes of every section the cause touches
    pub sections: Vec<String>,
    /// Document links filed under the cause
    #[serde(default)]
    pub links: Vec<BoardDocLink>,
}

impl BoardMatter {
    /// Pick-list display string, parseable back via
    /// [`crate::board::extract_cause_number`].
    pub fn display_label(&self) -> String {
        format!("Cause No. {} ({})", self.cause_number, self.board_year)
    }
}

/// A filed document attached to a board matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDocLink {
    pub description: String,
    pub url: String,
    /// Filing date, `YYYY-MM-DD`
    #[serde(default)]
    pub filed: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_format() {
        let matter = BoardMatter {
            cause_number: "139-32".to_string(),
            quip: "Spacing for the Big Flat unit".to_string(),
            order_type: "Spacing".to_string(),
            effective_date: "2024-03-01".to_string(),
            end_date: String::new(),
            board_year: 2024,
            docket_month: "March".to_string(),
            sections: vec!["01235S02WB".to_string()],
            links: Vec::new(),
        };
        assert_eq!(matter.display_label(), "Cause No. 139-32 (2024)");
    }
}
