//! Document repository access.
//!
//! The run needs three things from the repository: a verified session, a
//! handle on the target folder, and a way to drop bytes into it under a
//! name. `DocumentRepository` covers the last two; establishing the session
//! is backend specific (see [`SharePointSession::connect`]).

use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, UploadError};

mod assertion;
mod sharepoint;

pub use assertion::client_assertion;
pub use sharepoint::SharePointSession;

/// A folder resolved in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFolder {
    /// Site-relative path that was requested
    pub path: String,
    /// Server-relative URL reported back by the repository
    pub server_relative_url: String,
}

/// Repository operations used after the session is established.
pub trait DocumentRepository {
    /// Resolve a site-relative folder path, verifying it exists.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Folder` if the folder doesn't resolve.
    fn resolve_folder(&self, path: &str) -> Result<RemoteFolder>;

    /// Create or overwrite `name` inside `folder`.
    ///
    /// # Errors
    ///
    /// Returns `UploadError` on transport or permission failures.
    fn upload(&self, folder: &RemoteFolder, name: &str, contents: Vec<u8>) -> Result<()>;
}

/// Site-relative folder path built from a `<library>/<folder>` string.
///
/// Only the first two segments are used; deeper segments are dropped with a
/// warning. An empty second segment leaves just the library.
pub fn folder_path(remote: &str) -> String {
    let mut parts = remote.split('/');
    let library = parts.next().unwrap_or_default();
    let folder = parts.next().unwrap_or_default();

    let extra: Vec<&str> = parts.collect();
    if !extra.is_empty() {
        warn!(
            remote,
            ignored = %extra.join("/"),
            "remote folder has more than two segments; extra segments ignored"
        );
    }

    if folder.is_empty() {
        library.to_string()
    } else {
        format!("{}/{}", library, folder)
    }
}

/// Upload a local file into `remote` under its own file name.
///
/// # Errors
///
/// Returns `UploadError::ReadLocal` if the file can't be read, otherwise
/// whatever the repository reports.
pub fn upload_file(
    repository: &dyn DocumentRepository,
    remote: &str,
    local: &Path,
) -> Result<RemoteFolder> {
    let name = local
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| UploadError::Other(format!("no file name in {}", local.display())))?;

    let folder = repository.resolve_folder(&folder_path(remote))?;

    let contents = std::fs::read(local).map_err(|source| UploadError::ReadLocal {
        path: local.to_path_buf(),
        source,
    })?;

    repository.upload(&folder, &name, contents)?;
    info!(file = %name, folder = %folder.server_relative_url, "uploaded");
    Ok(folder)
}
