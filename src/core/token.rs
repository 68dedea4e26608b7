//! Client-credentials token exchange for the case API.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::core::domain::{BearerToken, ClientCredentials};
use crate::core::http;
use crate::error::{AuthError, Result};

/// Exchanges a client-credentials grant for a bearer token.
pub trait TokenExchange {
    /// # Errors
    ///
    /// Returns `AuthError` if the endpoint can't be reached or answers with a
    /// failure status.
    fn exchange(&self, grant: &ClientCredentials) -> Result<BearerToken>;
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Form-encoded OAuth token endpoint client
pub struct HttpTokenClient {
    http: Client,
}

impl HttpTokenClient {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

impl TokenExchange for HttpTokenClient {
    fn exchange(&self, grant: &ClientCredentials) -> Result<BearerToken> {
        info!("requesting case API token");
        debug!(url = %grant.token_url, client_id = %grant.client_id, "token exchange");

        let form = [
            ("client_secret", grant.client_secret.password()),
            ("grant_type", "client_credentials"),
            ("client_id", grant.client_id.as_str()),
            ("scope", "client"),
        ];

        let resp = self
            .http
            .post(&grant.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .form(&form)
            .send()
            .map_err(AuthError::Request)?;

        if !resp.status().is_success() {
            let (status, body) = http::failure(resp);
            return Err(AuthError::Status { status, body }.into());
        }

        let body: TokenResponse = resp.json().map_err(AuthError::Decode)?;
        let token = body.access_token.unwrap_or_else(|| {
            // Not fatal here; the first case query will be refused instead.
            warn!("token response has no access_token");
            String::new()
        });

        info!("case API token acquired");
        Ok(BearerToken::new(token))
    }
}
