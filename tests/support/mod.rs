//! Test support utilities for casetally integration tests.
//!
//! Provides an isolated working directory, a fake backend and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod backend;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use backend::{Behavior, FakeBackend, Recorded};
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Child processes run with `.current_dir()` set to `dir`, so tests can run
/// in parallel without touching process-global state.
pub struct Test {
    /// Working directory holding the vault, config and spreadsheets
    pub dir: TempDir,
    /// Fake services, when the test needs them
    pub backend: Option<FakeBackend>,
}

impl Test {
    /// Empty working directory, no backend.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir, backend: None }
    }

    /// Working directory with vault and config pointed at a fresh backend.
    pub fn with_backend(behavior: Behavior) -> Self {
        Self::with_backend_config(behavior, "")
    }

    /// Like [`with_backend`](Self::with_backend) with extra config lines.
    pub fn with_backend_config(behavior: Behavior, extra_config: &str) -> Self {
        let mut t = Self::new();
        let backend = FakeBackend::start(behavior);
        t.write("casetally-vault.toml", &vault_toml(&backend.base));
        t.write("casetally.toml", &config_toml(&backend.base, extra_config));
        t.backend = Some(backend);
        t
    }

    pub fn backend(&self) -> &FakeBackend {
        self.backend.as_ref().expect("test has no backend")
    }

    /// Write a file into the working directory.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path(name), contents).expect("failed to write test file");
    }

    /// Path inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Spreadsheets currently in the working directory.
    pub fn spreadsheets(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("read test dir")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|n| n.ends_with(".xlsx"))
            .collect();
        names.sort();
        names
    }
}
