//! Credential vault access.
//!
//! The vault hands out named username/password pairs and named constants.
//! Where they live is up to the backend; the run only needs the two lookups.
//!
//! ## Adding a New Vault Backend
//!
//! 1. Implement the `CredentialVault` trait
//! 2. Add the implementation in a new file (e.g., `keyring.rs`)
//! 3. Re-export from this module

use crate::core::domain::Credential;
use crate::error::Result;

mod file;
mod memory;

pub use file::FileVault;
pub use memory::MemoryVault;

/// Credential vault trait.
pub trait CredentialVault {
    /// Look up a named credential.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::NotFound` if no credential has that name.
    fn credential(&self, name: &str) -> Result<Credential>;

    /// Look up a named constant.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::NotFound` if no constant has that name.
    fn constant(&self, name: &str) -> Result<String>;
}

impl<V: CredentialVault + ?Sized> CredentialVault for &V {
    fn credential(&self, name: &str) -> Result<Credential> {
        (**self).credential(name)
    }

    fn constant(&self, name: &str) -> Result<String> {
        (**self).constant(name)
    }
}
