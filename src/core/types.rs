//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A worker or team code scoping a case query (e.g., `AZX0018`).
pub type CaseworkerId = String;

/// Name of a credential or constant in the vault.
pub type EntryName = String;

/// `<library>/<folder>` path inside the document repository.
pub type FolderPath = String;
