//! The end-to-end run.
//!
//! ```text
//! vault ─► bootstrap ─► repository session ─► token
//!                                               │
//!      ┌────────────────────────────────────────┘
//!      ▼
//!  for each caseworker: query ─► spreadsheet ─► upload ─► delete local file
//! ```
//!
//! Strictly sequential. The first error stops the run; uploads that already
//! happened stay in place.

use std::path::Path;

use tracing::{info, warn};

use crate::core::bootstrap::{self, Bootstrap};
use crate::core::config::Config;
use crate::core::domain::{BearerToken, ClientCredentials, CountRecord};
use crate::core::http;
use crate::core::query::{CaseClient, CaseSearch};
use crate::core::repository::{self, DocumentRepository, SharePointSession};
use crate::core::spreadsheet;
use crate::core::token::{HttpTokenClient, TokenExchange};
use crate::core::vault::CredentialVault;
use crate::error::Result;

/// Outcome for one published caseworker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub caseworker: String,
    pub record: CountRecord,
    /// Server-relative URL of the folder holding the file
    pub folder: String,
    /// Uploaded file name
    pub file_name: String,
}

/// Query a caseworker and turn the answer into a record.
pub fn tally(cases: &dyn CaseSearch, token: &BearerToken, caseworker: &str) -> Result<CountRecord> {
    let paging = cases.search(token, caseworker)?;
    let record = CountRecord::for_caseworker(caseworker, paging.count());
    info!("{}: {}", caseworker, record.count);
    Ok(record)
}

/// Per-caseworker loop over an established token and repository session.
pub struct Workflow<'a> {
    config: &'a Config,
    cases: &'a dyn CaseSearch,
    repository: &'a dyn DocumentRepository,
}

impl<'a> Workflow<'a> {
    pub fn new(
        config: &'a Config,
        cases: &'a dyn CaseSearch,
        repository: &'a dyn DocumentRepository,
    ) -> Self {
        Self {
            config,
            cases,
            repository,
        }
    }

    /// Exchange the grant for a token, then process every caseworker.
    ///
    /// # Errors
    ///
    /// Returns the first error; nothing is processed after it.
    pub fn run(
        &self,
        tokens: &dyn TokenExchange,
        grant: &ClientCredentials,
    ) -> Result<Vec<Published>> {
        let token = tokens.exchange(grant)?;
        self.process_all(&token)
    }

    /// Process every configured caseworker in order.
    pub fn process_all(&self, token: &BearerToken) -> Result<Vec<Published>> {
        let mut published = Vec::with_capacity(self.config.caseworkers.len());
        for caseworker in &self.config.caseworkers {
            published.push(self.process(token, caseworker)?);
        }
        info!(count = published.len(), "all caseworkers published");
        Ok(published)
    }

    /// Query, write, upload and clean up for one caseworker.
    ///
    /// The local spreadsheet is removed once the upload succeeds. When the
    /// upload fails it stays on disk unless `remove_on_failure` is set.
    pub fn process(&self, token: &BearerToken, caseworker: &str) -> Result<Published> {
        let record = tally(self.cases, token, caseworker)?;

        let path = self.config.spreadsheet_path(caseworker);
        spreadsheet::write(&record, &path)?;

        let folder = match repository::upload_file(self.repository, &self.config.remote_folder, &path)
        {
            Ok(folder) => folder,
            Err(e) => {
                if self.config.remove_on_failure {
                    remove_quietly(&path);
                }
                return Err(e);
            }
        };

        std::fs::remove_file(&path)?;

        Ok(Published {
            caseworker: caseworker.to_string(),
            record,
            folder: folder.server_relative_url,
            file_name: file_name(&path),
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn remove_quietly(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "failed to remove spreadsheet");
    }
}

/// Full run against the real services.
///
/// # Errors
///
/// Returns the first error from any stage.
pub fn run(config: &Config, vault: &dyn CredentialVault) -> Result<Vec<Published>> {
    info!("Running process.");

    let boot = bootstrap::resolve(vault, config)?;
    let client = http::client()?;
    let session = SharePointSession::connect(
        client.clone(),
        &config.login_authority,
        &boot.site_url,
        &boot.certificate,
    )?;
    let tokens = HttpTokenClient::new(client.clone());
    let cases = CaseClient::new(client, config.case_api_url.clone());

    Workflow::new(config, &cases, &session).run(&tokens, &boot.client)
}

/// Result of a credentials and connectivity check
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub site_url: String,
    pub site_title: String,
    pub token_url: String,
}

/// Resolve credentials and establish both sessions without processing anyone.
pub fn check(config: &Config, vault: &dyn CredentialVault) -> Result<CheckReport> {
    let Bootstrap {
        client: grant,
        certificate,
        site_url,
    } = bootstrap::resolve(vault, config)?;
    let client = http::client()?;
    let session = SharePointSession::connect(
        client.clone(),
        &config.login_authority,
        &site_url,
        &certificate,
    )?;
    HttpTokenClient::new(client).exchange(&grant)?;

    Ok(CheckReport {
        site_title: session.title().to_string(),
        site_url,
        token_url: grant.token_url,
    })
}

/// Query counts without writing or uploading anything.
pub fn count(
    config: &Config,
    vault: &dyn CredentialVault,
    caseworkers: &[String],
) -> Result<Vec<(String, CountRecord)>> {
    let boot = bootstrap::resolve(vault, config)?;
    let client = http::client()?;
    let token = HttpTokenClient::new(client.clone()).exchange(&boot.client)?;
    let cases = CaseClient::new(client, config.case_api_url.clone());

    let caseworkers = if caseworkers.is_empty() {
        &config.caseworkers[..]
    } else {
        caseworkers
    };

    caseworkers
        .iter()
        .map(|c| Ok((c.clone(), tally(&cases, &token, c)?)))
        .collect()
}
