//! Shared blocking HTTP client for source fetches.

use crate::error::WatchError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Build the client used for every source fetch: browser-like
/// headers, bounded timeout, limited redirects.
pub fn build_client() -> Result<Client, WatchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("text/html,application/xhtml+xml"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| WatchError::Fetch(format!("failed to build HTTP client: {}", e)))
}

/// GET a URL and return the body as text. Non-2xx statuses are fetch
/// failures so a broken source is skipped for the run.
pub fn get_text(client: &Client, url: &str) -> Result<String, WatchError> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| WatchError::Fetch(format!("{}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(WatchError::Fetch(format!("{}: HTTP {}", url, status.as_u16())));
    }

    response
        .text()
        .map_err(|e| WatchError::Fetch(format!("{}: {}", url, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }
}
