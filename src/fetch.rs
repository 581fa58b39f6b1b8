//! HTTP fetching.
//!
//! Provides a blocking HTTP client for release lists, installer pages and
//! file downloads. Transport failures and non-success statuses both surface
//! as [`FtcError::FetchFailed`]; nothing is retried.

use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::{FtcError, Result};

/// User agent sent with every request. GitHub's API rejects requests without one.
const USER_AGENT: &str = concat!("ftc-helper/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches pages, JSON documents and files over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FtcError::Other(anyhow::anyhow!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FtcError::FetchFailed {
                url: url.to_string(),
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FtcError::FetchFailed {
                url: url.to_string(),
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        Ok(response)
    }

    /// Fetch a URL and return its body as text.
    pub fn fetch(&self, url: &str) -> Result<String> {
        self.get(url)?.text().map_err(|e| FtcError::FetchFailed {
            url: url.to_string(),
            status: None,
            message: format!("failed to read body: {}", e),
        })
    }

    /// Fetch a URL and decode its body as JSON.
    ///
    /// Undecodable bodies are `MalformedInput`, not fetch failures.
    pub fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url)?;
        serde_json::from_str(&body)
            .map_err(|e| FtcError::malformed(format!("unexpected JSON from {}: {}", url, e)))
    }

    /// Stream a URL's body into `dest`, returning the number of bytes written.
    ///
    /// The body is written to a temporary file next to `dest`, which only
    /// replaces `dest` once the whole body has arrived.
    pub fn download_to(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut response = self.get(url)?;

        let parent = match dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                dir
            }
            None => Path::new("."),
        };

        let mut partial = NamedTempFile::new_in(parent)?;
        let bytes = {
            let mut writer = BufWriter::new(partial.as_file_mut());
            let bytes = response
                .copy_to(&mut writer)
                .map_err(|e| FtcError::FetchFailed {
                    url: url.to_string(),
                    status: None,
                    message: format!("download interrupted: {}", e),
                })?;
            writer.flush()?;
            bytes
        };
        partial.persist(dest).map_err(|e| FtcError::Io(e.error))?;

        tracing::info!("Downloaded {} bytes to {}", bytes, dest.display());
        Ok(bytes)
    }
}
