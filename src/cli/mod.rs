//! Command-line interface.

pub mod check;
pub mod count;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants;
use crate::core::vault::FileVault;
use crate::error::Result;

/// Casetally - counts case documents per caseworker and publishes the tally.
#[derive(Parser)]
#[command(
    name = "casetally",
    about = "Counts case documents per caseworker and publishes the tally",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ./casetally.toml if present)
    #[arg(long, global = true, env = "CASETALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Vault file with credentials and constants
    #[arg(long, global = true, env = "CASETALLY_VAULT", default_value = constants::VAULT_FILE)]
    pub vault: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Query every caseworker, write the spreadsheets and upload them
    Run,

    /// Print counts without writing or uploading anything
    Count {
        /// Caseworkers to query (default: the configured list)
        caseworkers: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify credentials, token exchange and the repository session
    Check,
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let vault = FileVault::open(&cli.vault)?;

    match cli.command {
        Command::Run => run::execute(&config, &vault),
        Command::Count { caseworkers, json } => count::execute(&config, &vault, &caseworkers, json),
        Command::Check => check::execute(&config, &vault),
    }
}
