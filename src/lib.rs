//! Casetally - counts case documents per caseworker and publishes the tally.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Full run: query, write, upload, clean up
//! │   ├── count         # Print counts only
//! │   ├── check         # Verify credentials and sessions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # casetally.toml handling
//!     ├── vault/        # Credential vault backends
//!     ├── bootstrap     # Credential resolution
//!     ├── token         # Case API token exchange
//!     ├── query         # Case-document search
//!     ├── spreadsheet   # Single-row .xlsx writer
//!     ├── repository/   # Document repository session and upload
//!     └── workflow      # The end-to-end run
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Config;
pub use crate::core::workflow::{run, Published, Workflow};
