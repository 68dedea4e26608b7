//! Workflow configuration.
//!
//! Handles reading and validating `casetally.toml`. Every field is optional in
//! the file; anything left out keeps the built-in value from [`constants`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::{CaseworkerId, FolderPath};
use crate::error::{ConfigError, Result};

/// Everything the run needs besides secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Caseworkers processed in order
    pub caseworkers: Vec<CaseworkerId>,
    /// Case-search endpoint
    pub case_api_url: String,
    /// Remote `<library>/<folder>` receiving the spreadsheets
    pub remote_folder: FolderPath,
    /// Path appended to the vault's base site URL
    pub site_path_suffix: String,
    /// Azure AD authority used for the repository certificate login
    pub login_authority: String,
    /// Directory the spreadsheets are written to before upload
    pub work_dir: PathBuf,
    /// Delete the local spreadsheet even when its upload fails
    pub remove_on_failure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            caseworkers: constants::DEFAULT_CASEWORKERS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            case_api_url: constants::CASE_API_URL.to_string(),
            remote_folder: constants::REMOTE_FOLDER.to_string(),
            site_path_suffix: constants::SITE_PATH_SUFFIX.to_string(),
            login_authority: constants::LOGIN_AUTHORITY.to_string(),
            work_dir: PathBuf::from("."),
            remove_on_failure: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file can't be read,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(caseworkers = config.caseworkers.len(), "config loaded");

        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for this invocation.
    ///
    /// An explicit path must exist. Without one, `casetally.toml` in the
    /// current directory is used when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(constants::CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.caseworkers.is_empty() {
            return Err(invalid("caseworkers", "at least one caseworker is required"));
        }
        if let Some(pos) = self.caseworkers.iter().position(|c| c.trim().is_empty()) {
            return Err(invalid(
                "caseworkers",
                format!("entry {} is empty", pos + 1),
            ));
        }
        if self.remote_folder.trim_matches('/').is_empty() {
            return Err(invalid("remote_folder", "must name a document library"));
        }
        if !(self.case_api_url.starts_with("https://") || self.case_api_url.starts_with("http://"))
        {
            return Err(invalid(
                "case_api_url",
                format!("not an absolute http(s) URL: {}", self.case_api_url),
            ));
        }
        Ok(())
    }

    /// Full site URL for a base URL taken from the vault.
    pub fn site_url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.site_path_suffix)
    }

    /// Local path of the spreadsheet for a caseworker.
    pub fn spreadsheet_path(&self, caseworker: &str) -> PathBuf {
        self.work_dir
            .join(format!("{}.{}", caseworker, constants::SPREADSHEET_EXTENSION))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
    .into()
}
