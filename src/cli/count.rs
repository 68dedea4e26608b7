//! Count command.
//!
//! Prints the resolved counts without touching the filesystem or repository.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::vault::CredentialVault;
use crate::core::workflow;
use crate::error::Result;

/// Query and print counts.
pub fn execute(
    config: &Config,
    vault: &dyn CredentialVault,
    caseworkers: &[String],
    json: bool,
) -> Result<()> {
    let counts = workflow::count(config, vault, caseworkers)?;

    if json {
        let rows: Vec<serde_json::Value> = counts
            .iter()
            .map(|(caseworker, record)| {
                serde_json::json!({
                    "caseworker": caseworker,
                    "Indsendelser": record.label,
                    "Antal": record.count,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if counts.is_empty() {
        output::dimmed("no caseworkers");
    } else {
        output::header("Counts");
        for (caseworker, record) in &counts {
            output::kv(caseworker, record);
        }
    }
    Ok(())
}
