//! Credential types.
//!
//! Username/password pairs from the vault and the bearer token obtained with
//! them. Secret halves are wiped from memory on drop and never printed.

use std::path::PathBuf;

use zeroize::Zeroizing;

/// A username/password-shaped secret resolved from the vault
#[derive(Clone)]
pub struct Credential {
    name: String,
    username: String,
    password: Zeroizing<String>,
}

impl Credential {
    /// Create a credential from its vault name and both fields
    pub fn new(name: impl Into<String>, username: impl Into<String>, password: String) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: Zeroizing::new(password),
        }
    }

    /// Vault entry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Username field
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password field
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client-credentials grant for the case API token endpoint
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    /// Token endpoint URL
    pub token_url: String,
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: Credential,
}

/// Certificate login for the document repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateAuth {
    /// Directory tenant (e.g. `contoso.onmicrosoft.com`)
    pub tenant: String,
    /// App registration client id
    pub client_id: String,
    /// SHA-1 thumbprint of the certificate, hex encoded
    pub thumbprint: String,
    /// PEM file holding the private key
    pub cert_path: PathBuf,
}

/// Short-lived authorization for the case API
#[derive(Clone)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    pub fn new(token: String) -> Self {
        Self(Zeroizing::new(token))
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}
