//! Paging block of a case-search response.

use serde::Deserialize;

/// Body of a case-search response; only paging is read
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseSearchResponse {
    pub paging_information: PagingInformation,
}

/// `pagingInformation` as returned by the case API
///
/// Missing or null fields read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagingInformation {
    number_of_rows: Option<i64>,
    total_number_of_rows: Option<i64>,
}

impl PagingInformation {
    pub fn new(number_of_rows: i64, total_number_of_rows: i64) -> Self {
        Self {
            number_of_rows: Some(number_of_rows),
            total_number_of_rows: Some(total_number_of_rows),
        }
    }

    /// Rows returned in this page
    pub fn number_of_rows(&self) -> i64 {
        self.number_of_rows.unwrap_or(0)
    }

    /// Rows matching the query across all pages
    pub fn total_number_of_rows(&self) -> i64 {
        self.total_number_of_rows.unwrap_or(0)
    }

    /// Reported count.
    ///
    /// The total is only trusted when the page itself returned rows; an empty
    /// page reports 0 whatever the total says.
    pub fn count(&self) -> i64 {
        if self.number_of_rows() > 0 {
            self.total_number_of_rows()
        } else {
            0
        }
    }
}
