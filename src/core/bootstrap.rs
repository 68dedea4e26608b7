//! Credential resolution.
//!
//! Pulls every secret the run needs out of the vault up front, so a missing
//! entry fails the run before any network traffic.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::{CertificateAuth, ClientCredentials};
use crate::core::vault::CredentialVault;
use crate::error::Result;

/// Everything resolved from the vault for one run
#[derive(Debug, Clone)]
pub struct Bootstrap {
    /// Grant for the case API token endpoint
    pub client: ClientCredentials,
    /// Certificate login for the document repository
    pub certificate: CertificateAuth,
    /// Full repository site URL
    pub site_url: String,
}

/// Resolve the four credential pairs and the site constant.
///
/// # Errors
///
/// Returns `CredentialError::NotFound` for the first missing entry.
pub fn resolve(vault: &dyn CredentialVault, config: &Config) -> Result<Bootstrap> {
    info!("resolving credentials");

    let token = vault.credential(constants::TOKEN_CREDENTIAL)?;
    let secret = vault.credential(constants::CLIENT_SECRET_CREDENTIAL)?;
    let base = vault.constant(constants::SITE_BASE_CONSTANT)?;
    let cert = vault.credential(constants::CERTIFICATE_CREDENTIAL)?;
    let api = vault.credential(constants::REPOSITORY_API_CREDENTIAL)?;

    let site_url = config.site_url(&base);
    debug!(site = %site_url, token_url = %token.username(), "credentials resolved");

    Ok(Bootstrap {
        client: ClientCredentials {
            token_url: token.username().to_string(),
            client_id: secret.username().to_string(),
            client_secret: secret,
        },
        certificate: CertificateAuth {
            tenant: api.username().to_string(),
            client_id: api.password().to_string(),
            thumbprint: cert.username().to_string(),
            cert_path: PathBuf::from(cert.password()),
        },
        site_url,
    })
}
