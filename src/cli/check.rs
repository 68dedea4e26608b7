//! Check command.
//!
//! Resolves every credential and establishes both sessions, then stops.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::vault::CredentialVault;
use crate::core::workflow;
use crate::error::Result;

/// Verify credentials and connectivity.
pub fn execute(config: &Config, vault: &dyn CredentialVault) -> Result<()> {
    let report = workflow::check(config, vault)?;

    output::success("credentials and sessions ok");
    output::kv("site ", &report.site_url);
    output::kv("title", &report.site_title);
    output::kv("token", &report.token_url);
    Ok(())
}
