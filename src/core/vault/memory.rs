//! In-memory vault.
//!
//! Used by embedders that already hold their secrets and by tests.

use std::collections::BTreeMap;

use super::CredentialVault;
use crate::core::domain::Credential;
use crate::error::{CredentialError, Result};

/// Vault populated programmatically
#[derive(Debug, Default, Clone)]
pub struct MemoryVault {
    credentials: BTreeMap<String, Credential>,
    constants: BTreeMap<String, String>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a credential
    pub fn with_credential(mut self, name: &str, username: &str, password: &str) -> Self {
        self.credentials.insert(
            name.to_string(),
            Credential::new(name, username, password.to_string()),
        );
        self
    }

    /// Add or replace a constant
    pub fn with_constant(mut self, name: &str, value: &str) -> Self {
        self.constants.insert(name.to_string(), value.to_string());
        self
    }
}

impl CredentialVault for MemoryVault {
    fn credential(&self, name: &str) -> Result<Credential> {
        self.credentials.get(name).cloned().ok_or_else(|| {
            CredentialError::NotFound {
                kind: "credential",
                name: name.to_string(),
            }
            .into()
        })
    }

    fn constant(&self, name: &str) -> Result<String> {
        self.constants.get(name).cloned().ok_or_else(|| {
            CredentialError::NotFound {
                kind: "constant",
                name: name.to_string(),
            }
            .into()
        })
    }
}
