//! Shared blocking HTTP client setup.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

/// Per-request timeout for every outbound call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Longest error body kept for error messages.
const MAX_ERROR_BODY: usize = 512;

/// Build the client used for all calls in a run.
pub fn client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("casetally/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// Status code and truncated body of a failed response.
pub fn failure(resp: Response) -> (u16, String) {
    let status = resp.status().as_u16();
    let mut body = resp.text().unwrap_or_default();
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    (status, body)
}
