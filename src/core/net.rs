// src/core/net.rs
// Blocking HTTP GET. One request at a time; no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| Error::fetch("<client>", e))
}

/// GET `url` and return the body. Any non-2xx status is a fetch error.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send().map_err(|e| Error::fetch(url, e))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::fetch(url, format!("HTTP {status}")));
    }
    resp.text().map_err(|e| Error::fetch(url, e))
}
