//! HTTP client for the SerialGo site
//!
//! One GET per call. Failures are reported as-is; there is no retry or
//! request throttling at this layer.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};

use crate::error::{SerialgoError, Result};

/// Base URL of the SerialGo site
pub const SERIALGO_BASE_URL: &str = "https://www.serialgo.to";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Configuration for the SerialGo HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root every relative path is appended to (default: [`SERIALGO_BASE_URL`])
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: SERIALGO_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the SerialGo site
pub struct SerialgoClient {
    client: reqwest::Client,
    base_url: String,
}

impl SerialgoClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site root without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the site root.
    ///
    /// The path is appended verbatim, so ids taken from link targets
    /// (`/series/...`) map back to the page they came from.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch HTML content from a path on the site
    ///
    /// # Errors
    /// - `SerialgoError::NotFound` - Server returned 404
    /// - `SerialgoError::Http` - Network error or any other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        tracing::debug!(%url, "fetching page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SerialgoError::NotFound(url));
        }

        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
