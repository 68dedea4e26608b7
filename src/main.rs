//! Casetally - counts case documents per caseworker and publishes the tally.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use casetally::cli::output;
use casetally::cli::{execute, Cli};
use casetally::core::constants;
use casetally::error::{AuthError, ConfigError, CredentialError, Error, SessionError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("casetally=debug")
        } else {
            EnvFilter::new("casetally=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Credential(CredentialError::MissingVault(_)) => {
                Some("pass --vault or set CASETALLY_VAULT")
            }
            Error::Credential(CredentialError::NotFound { .. }) => {
                Some("add the missing entry to the vault file")
            }
            Error::Session(SessionError::Certificate { .. } | SessionError::Thumbprint(_)) => {
                Some("check the SharePointCert credential (thumbprint, key path)")
            }
            Error::Auth(AuthError::Status { .. }) => {
                Some("check the KMDAccessToken and KMDClientSecret credentials")
            }
            Error::Config(ConfigError::InvalidValue { .. } | ConfigError::Parse(_)) => {
                Some("fix casetally.toml")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
