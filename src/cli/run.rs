//! Run command.
//!
//! Queries every configured caseworker, writes the spreadsheets and uploads
//! them to the repository.

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::vault::CredentialVault;
use crate::core::workflow;
use crate::error::Result;

/// Run the full workflow.
pub fn execute(config: &Config, vault: &dyn CredentialVault) -> Result<()> {
    info!(caseworkers = config.caseworkers.len(), "starting run");
    let published = workflow::run(config, vault)?;

    for p in &published {
        output::success(&format!(
            "{} → {}/{} ({})",
            p.caseworker, p.folder, p.file_name, p.record
        ));
    }
    Ok(())
}
