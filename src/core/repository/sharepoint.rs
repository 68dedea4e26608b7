//! SharePoint REST session with certificate authentication.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, info};

use super::assertion::client_assertion;
use super::{DocumentRepository, RemoteFolder};
use crate::core::domain::{BearerToken, CertificateAuth};
use crate::core::http;
use crate::error::{Result, SessionError, UploadError};

const JSON_NOMETADATA: &str = "application/json;odata=nometadata";
const ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Web {
    title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Folder {
    #[serde(default)]
    server_relative_url: String,
    #[serde(default = "exists_default")]
    exists: bool,
}

fn exists_default() -> bool {
    true
}

/// Authenticated handle on one SharePoint site
pub struct SharePointSession {
    http: Client,
    site_url: String,
    token: BearerToken,
    title: String,
}

impl std::fmt::Debug for SharePointSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharePointSession")
            .field("site_url", &self.site_url)
            .field("title", &self.title)
            .finish()
    }
}

impl SharePointSession {
    /// Log in with a certificate against `authority` and verify the site by
    /// loading its root web.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the certificate is unusable, the directory
    /// rejects it, or the site doesn't resolve.
    pub fn connect(
        http: Client,
        authority: &str,
        site_url: &str,
        cert: &CertificateAuth,
    ) -> Result<Self> {
        let site_url = site_url.trim_end_matches('/').to_string();
        let scope = scope_for(&site_url)?;
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            authority.trim_end_matches('/'),
            cert.tenant
        );
        debug!(%token_url, %scope, "requesting repository token");

        let assertion = client_assertion(cert, &token_url)?;
        let form = [
            ("client_id", cert.client_id.as_str()),
            ("scope", scope.as_str()),
            ("client_assertion_type", ASSERTION_TYPE),
            ("client_assertion", assertion.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let resp = http
            .post(&token_url)
            .form(&form)
            .send()
            .map_err(SessionError::Request)?;
        if !resp.status().is_success() {
            let (status, body) = http::failure(resp);
            return Err(SessionError::Rejected { status, body }.into());
        }
        let token: TokenResponse = resp.json().map_err(SessionError::Request)?;

        let mut session = Self {
            http,
            site_url,
            token: BearerToken::new(token.access_token),
            title: String::new(),
        };
        session.title = session.load_web()?.title;

        info!("Authenticated successfully. Site Title: {}", session.title);
        Ok(session)
    }

    /// Site title loaded during [`connect`](Self::connect)
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    fn load_web(&self) -> Result<Web> {
        let url = format!("{}/_api/web", self.site_url);
        let resp = self.get(&url).send().map_err(SessionError::Request)?;

        match resp.status() {
            s if s.is_success() => Ok(resp.json().map_err(SessionError::Request)?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let (status, body) = http::failure(resp);
                Err(SessionError::Rejected { status, body }.into())
            }
            s => Err(SessionError::Site {
                status: s.as_u16(),
                url,
            }
            .into()),
        }
    }

    fn folder_url(&self, path: &str) -> String {
        format!(
            "{}/_api/web/GetFolderByServerRelativeUrl('{}')",
            self.site_url,
            odata_literal(path)
        )
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .header(ACCEPT, JSON_NOMETADATA)
            .header(AUTHORIZATION, self.token.header_value())
    }
}

impl DocumentRepository for SharePointSession {
    fn resolve_folder(&self, path: &str) -> Result<RemoteFolder> {
        let url = self.folder_url(path);
        debug!(%url, "resolving folder");

        let resp = self.get(&url).send().map_err(UploadError::Request)?;
        if !resp.status().is_success() {
            let (status, body) = http::failure(resp);
            return Err(UploadError::Folder {
                folder: path.to_string(),
                status,
                body,
            }
            .into());
        }

        let folder: Folder = resp.json().map_err(UploadError::Request)?;
        if !folder.exists {
            return Err(UploadError::Folder {
                folder: path.to_string(),
                status: StatusCode::NOT_FOUND.as_u16(),
                body: "folder does not exist".to_string(),
            }
            .into());
        }

        Ok(RemoteFolder {
            path: path.to_string(),
            server_relative_url: folder.server_relative_url,
        })
    }

    fn upload(&self, folder: &RemoteFolder, name: &str, contents: Vec<u8>) -> Result<()> {
        let url = format!(
            "{}/Files/add(url='{}',overwrite=true)",
            self.folder_url(&folder.path),
            odata_literal(name)
        );
        debug!(%url, bytes = contents.len(), "uploading");

        let resp = self
            .http
            .post(&url)
            .header(ACCEPT, JSON_NOMETADATA)
            .header(AUTHORIZATION, self.token.header_value())
            .body(contents)
            .send()
            .map_err(UploadError::Request)?;

        if !resp.status().is_success() {
            let (status, body) = http::failure(resp);
            return Err(UploadError::Refused {
                name: name.to_string(),
                status,
                body,
            }
            .into());
        }
        Ok(())
    }
}

/// `.default` scope for the site's host.
fn scope_for(site_url: &str) -> Result<String> {
    let url = Url::parse(site_url).map_err(|e| SessionError::InvalidSite(e.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| SessionError::InvalidSite(format!("no host in {}", site_url)))?;
    Ok(match url.port() {
        Some(port) => format!("{}://{}:{}/.default", url.scheme(), host, port),
        None => format!("{}://{}/.default", url.scheme(), host),
    })
}

/// Escape a value for a quoted OData string inside a URL path.
fn odata_literal(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('#', "%23")
        .replace('?', "%3F")
        .replace('\'', "''")
}
