//! TOML-backed vault.
//!
//! ```toml
//! [credentials.KMDClientSecret]
//! username = "client-id"
//! password = "client-secret"
//!
//! [constants]
//! AarhusKommuneSharePoint = "https://tenant.sharepoint.com"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::CredentialVault;
use crate::core::domain::Credential;
use crate::core::types::EntryName;
use crate::error::{CredentialError, Result};

#[derive(Deserialize)]
struct Entry {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

// Field-level defaults: a container default would move fields out of a
// `Drop` type.
#[derive(Deserialize)]
struct Contents {
    #[serde(default)]
    credentials: BTreeMap<EntryName, Entry>,
    #[serde(default)]
    constants: BTreeMap<EntryName, String>,
}

/// Vault read from a TOML file on disk
pub struct FileVault {
    contents: Contents,
}

impl std::fmt::Debug for FileVault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileVault")
            .field("credentials", &self.contents.credentials.keys().collect::<Vec<_>>())
            .field("constants", &self.contents.constants.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FileVault {
    /// Open and parse a vault file.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::MissingVault` if the file does not exist,
    /// `CredentialError::Read` or `CredentialError::Parse` otherwise.
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening vault");

        if !path.exists() {
            return Err(CredentialError::MissingVault(path.to_path_buf()).into());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(meta) = std::fs::metadata(path) {
                let mode = meta.permissions().mode() & 0o777;
                if mode & 0o077 != 0 {
                    warn!(
                        path = %path.display(),
                        mode = %format!("{:o}", mode),
                        "vault file is readable by others"
                    );
                }
            }
        }

        let raw = Zeroizing::new(std::fs::read_to_string(path).map_err(CredentialError::Read)?);
        let contents: Contents = toml::from_str(&raw).map_err(CredentialError::Parse)?;

        debug!(
            credentials = contents.credentials.len(),
            constants = contents.constants.len(),
            "vault loaded"
        );

        Ok(Self { contents })
    }
}

impl CredentialVault for FileVault {
    fn credential(&self, name: &str) -> Result<Credential> {
        let entry = self
            .contents
            .credentials
            .get(name)
            .ok_or_else(|| CredentialError::NotFound {
                kind: "credential",
                name: name.to_string(),
            })?;
        Ok(Credential::new(
            name,
            entry.username.clone(),
            entry.password.clone(),
        ))
    }

    fn constant(&self, name: &str) -> Result<String> {
        self.contents.constants.get(name).cloned().ok_or_else(|| {
            CredentialError::NotFound {
                kind: "constant",
                name: name.to_string(),
            }
            .into()
        })
    }
}

impl Drop for Contents {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        for entry in self.credentials.values_mut() {
            entry.password.zeroize();
        }
    }
}
