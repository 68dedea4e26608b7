//! Case-document search.
//!
//! One PUT per caseworker asking for a single row plus the total row count of
//! main documents (`*hoveddokument*`) assigned to them.

use std::collections::BTreeMap;

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::core::domain::caseworker;
use crate::core::domain::{BearerToken, CaseSearchResponse, PagingInformation};
use crate::core::http;
use crate::error::{QueryError, Result};

/// Title filter for main documents.
pub const TITLE_FILTER: &str = "*hoveddokument*";

/// Searches case documents for a caseworker.
pub trait CaseSearch {
    /// # Errors
    ///
    /// Returns `QueryError` on transport failure, a failure status, or an
    /// unreadable body.
    fn search(&self, token: &BearerToken, caseworker: &str) -> Result<PagingInformation>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Common {
    transaction_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Paging {
    start_row: u32,
    number_of_rows: u32,
    calculate_total_number_of_rows: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CaseworkerScope {
    ksp_identity: BTreeMap<&'static str, String>,
}

#[derive(Debug, Serialize)]
struct GetOutput {
    title: bool,
}

/// JSON body of a case-search call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    common: Common,
    paging: Paging,
    title: &'static str,
    caseworker: CaseworkerScope,
    accept_received: bool,
    get_output: GetOutput,
}

impl SearchRequest {
    /// Body for a caseworker with a fresh transaction id
    pub fn new(caseworker_id: &str) -> Self {
        let scope = caseworker::profile(caseworker_id).scope;
        Self {
            common: Common {
                transaction_id: transaction_id(),
            },
            paging: Paging {
                start_row: 0,
                number_of_rows: 1,
                calculate_total_number_of_rows: true,
            },
            title: TITLE_FILTER,
            caseworker: CaseworkerScope {
                ksp_identity: BTreeMap::from([(scope.as_str(), caseworker_id.to_string())]),
            },
            accept_received: false,
            get_output: GetOutput { title: false },
        }
    }

    pub fn transaction_id(&self) -> &str {
        &self.common.transaction_id
    }
}

/// New transaction id: a v4 UUID, hyphenated and uppercase.
pub fn transaction_id() -> String {
    Uuid::new_v4().hyphenated().to_string().to_uppercase()
}

/// Case API client
pub struct CaseClient {
    http: Client,
    url: String,
}

impl CaseClient {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

impl CaseSearch for CaseClient {
    fn search(&self, token: &BearerToken, caseworker: &str) -> Result<PagingInformation> {
        let body = SearchRequest::new(caseworker);
        debug!(
            caseworker,
            transaction_id = body.transaction_id(),
            "searching case documents"
        );

        let resp = self
            .http
            .put(&self.url)
            .header(reqwest::header::AUTHORIZATION, token.header_value())
            .json(&body)
            .send()
            .map_err(|source| QueryError::Request {
                caseworker: caseworker.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            let (status, body) = http::failure(resp);
            return Err(QueryError::Status {
                caseworker: caseworker.to_string(),
                status,
                body,
            }
            .into());
        }

        let parsed: CaseSearchResponse = resp.json().map_err(|source| QueryError::Decode {
            caseworker: caseworker.to_string(),
            source,
        })?;
        trace!(paging = ?parsed.paging_information, "case search response");

        Ok(parsed.paging_information)
    }
}
