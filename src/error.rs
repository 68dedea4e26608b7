//! Error types.
//!
//! Each stage of the run has its own error enum; [`Error`] wraps them so
//! every stage can propagate with `?` straight to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error returned by every public operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Lookups against the credential vault.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("{kind} not found in vault: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("vault file not found: {}", .0.display())]
    MissingVault(PathBuf),

    #[error("failed to read vault file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse vault file: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Establishing the certificate-authenticated repository session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to read certificate {}: {source}", path.display())]
    Certificate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid certificate thumbprint: {0}")]
    Thumbprint(String),

    #[error("failed to sign client assertion: {0}")]
    Assertion(#[from] jsonwebtoken::errors::Error),

    #[error("repository rejected the certificate ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid site url: {0}")]
    InvalidSite(String),

    #[error("site did not resolve ({status}): {url}")]
    Site { status: u16, url: String },

    #[error("repository request failed: {0}")]
    Request(#[source] reqwest::Error),
}

/// Client-credentials exchange against the token endpoint.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("token endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed token response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Case-search calls.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("case query for {caseworker} failed: {source}")]
    Request {
        caseworker: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("case query for {caseworker} returned {status}: {body}")]
    Status {
        caseworker: String,
        status: u16,
        body: String,
    },

    #[error("malformed case query response for {caseworker}: {source}")]
    Decode {
        caseworker: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Writing the spreadsheet to local disk.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to write spreadsheet {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// Pushing files into the document repository.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("failed to read {}: {source}", path.display())]
    ReadLocal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("remote folder {folder} could not be resolved ({status}): {body}")]
    Folder {
        folder: String,
        status: u16,
        body: String,
    },

    #[error("upload of {name} was refused ({status}): {body}")]
    Refused {
        name: String,
        status: u16,
        body: String,
    },

    #[error("upload request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Loading and validating `casetally.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
