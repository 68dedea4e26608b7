//! Constants used throughout casetally.
//!
//! Centralizes vault entry names, fixed endpoints and file names.

/// Vault credential holding the token endpoint URL (username field).
pub const TOKEN_CREDENTIAL: &str = "KMDAccessToken";

/// Vault credential holding the client id (username) and client secret (password).
pub const CLIENT_SECRET_CREDENTIAL: &str = "KMDClientSecret";

/// Vault credential holding the certificate thumbprint (username) and PEM path (password).
pub const CERTIFICATE_CREDENTIAL: &str = "SharePointCert";

/// Vault credential holding the tenant (username) and client id (password).
pub const REPOSITORY_API_CREDENTIAL: &str = "SharePointAPI";

/// Vault constant holding the base site URL.
pub const SITE_BASE_CONSTANT: &str = "AarhusKommuneSharePoint";

/// Site path appended to the base site URL.
pub const SITE_PATH_SUFFIX: &str = "/Teams/tea-teamsite10168";

/// Case-search endpoint.
pub const CASE_API_URL: &str = "https://novaapi.kmd.dk/api/Document/GetList?api-version=2.0-Case";

/// Remote `<library>/<folder>` receiving the spreadsheets.
pub const REMOTE_FOLDER: &str = "Delte dokumenter/Dokumentsøgning";

/// Caseworkers processed when the config does not name any.
pub const DEFAULT_CASEWORKERS: &[&str] = &["AZX0018", "2GBYGSAG Byggeri"];

/// Caseworker whose documents are changed submissions and who is scoped by RACF id.
pub const CHANGED_SUBMISSIONS_CASEWORKER: &str = "AZX0018";

/// Spreadsheet file extension.
pub const SPREADSHEET_EXTENSION: &str = "xlsx";

/// Configuration file name.
pub const CONFIG_FILE: &str = "casetally.toml";

/// Vault file name used when neither `--vault` nor `CASETALLY_VAULT` is given.
pub const VAULT_FILE: &str = "casetally-vault.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "CASETALLY_LOG";

/// Azure AD authority issuing repository access tokens.
pub const LOGIN_AUTHORITY: &str = "https://login.microsoftonline.com";
