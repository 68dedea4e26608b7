//! Signed client assertion for certificate login.
//!
//! Azure AD accepts an RS256 JWT signed with the app's certificate key in
//! place of a client secret. The `x5t` header carries the certificate
//! thumbprint so the directory can pick the matching public key.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use crate::core::domain::CertificateAuth;
use crate::error::{Result, SessionError};

/// Assertion lifetime on either side of now, in seconds.
const VALIDITY_SECS: i64 = 600;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    aud: &'a str,
    iss: &'a str,
    sub: &'a str,
    jti: String,
    nbf: i64,
    exp: i64,
}

/// Build a client assertion for `audience` (the token endpoint URL).
///
/// # Errors
///
/// Returns `SessionError::Certificate` if the key file can't be read,
/// `SessionError::Thumbprint` if the thumbprint isn't hex, or
/// `SessionError::Assertion` if the key can't sign.
pub fn client_assertion(cert: &CertificateAuth, audience: &str) -> Result<String> {
    let pem = std::fs::read(&cert.cert_path).map_err(|source| SessionError::Certificate {
        path: cert.cert_path.clone(),
        source,
    })?;
    let key = EncodingKey::from_rsa_pem(&pem).map_err(SessionError::Assertion)?;

    let thumbprint = hex::decode(cert.thumbprint.trim().replace(':', ""))
        .map_err(|e| SessionError::Thumbprint(e.to_string()))?;

    let mut header = Header::new(Algorithm::RS256);
    header.x5t = Some(URL_SAFE.encode(thumbprint));

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        aud: audience,
        iss: &cert.client_id,
        sub: &cert.client_id,
        jti: Uuid::new_v4().to_string(),
        nbf: now - VALIDITY_SECS,
        exp: now + VALIDITY_SECS,
    };

    let token = encode(&header, &claims, &key).map_err(SessionError::Assertion)?;
    Ok(token)
}
