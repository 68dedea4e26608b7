//! Case-count record.

use crate::core::domain::caseworker;

/// One spreadsheet row: bucket label and resolved count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRecord {
    /// `Indsendelser` column
    pub label: String,
    /// `Antal` column, the decimal form of the count
    pub count: String,
}

impl CountRecord {
    /// Column headers in output order
    pub const COLUMNS: [&'static str; 2] = ["Indsendelser", "Antal"];

    /// Record for a caseworker and the count resolved for it
    pub fn for_caseworker(caseworker: &str, count: i64) -> Self {
        Self {
            label: caseworker::profile(caseworker).label.to_string(),
            count: count.to_string(),
        }
    }

    /// Cell values in column order
    pub fn values(&self) -> [&str; 2] {
        [&self.label, &self.count]
    }
}

impl std::fmt::Display for CountRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.count)
    }
}
