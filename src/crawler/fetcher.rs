//! HTTP fetcher implementation
//!
//! Every network request made during an inventory run goes through here.
//! Failures (timeouts, refused connections, DNS errors, unreadable bodies)
//! come back as [`FetchResult::NetworkError`] values instead of errors, so
//! callers treat them as "page unavailable" and keep going. There are no
//! retries.

use crate::config::{FetchConfig, UserAgentConfig};
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;

/// Classification of a network-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    /// The request did not complete within the configured timeout
    Timeout,
    /// Connection refused, DNS failure, TLS failure
    Connect,
    /// Response headers arrived but the body could not be read
    Body,
    /// Anything else reqwest reports (redirect loops, invalid URLs)
    Other,
}

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The server answered
    Response {
        /// HTTP status code
        status_code: u16,
        /// Content-Type header value (empty when absent)
        content_type: String,
        /// Page body; only read for 200 responses
        body: String,
    },

    /// No usable response
    NetworkError {
        /// Error description
        error: String,
        /// Failure classification
        kind: NetworkErrorKind,
    },
}

/// Builds an HTTP client with the identifying user agent and timeout
///
/// # Example
///
/// ```no_run
/// use sitegap::config::{FetchConfig, UserAgentConfig};
/// use sitegap::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    fetch: &FetchConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(fetch.timeout_secs);

    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::limited(fetch.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues single GET requests on behalf of one or more inventory runs
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher from configuration
    pub fn new(fetch: &FetchConfig, user_agent: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(fetch, user_agent)?,
        })
    }

    /// Fetches a URL, never failing
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | HTTP 200 | `Response` with body |
    /// | Any other status | `Response` with empty body |
    /// | Timeout | `NetworkError` / `Timeout` |
    /// | Connection refused, DNS, TLS | `NetworkError` / `Connect` |
    /// | Body read failure | `NetworkError` / `Body` |
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return classify_error(e),
        };

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if status != StatusCode::OK {
            return FetchResult::Response {
                status_code: status.as_u16(),
                content_type,
                body: String::new(),
            };
        }

        match response.text().await {
            Ok(body) => FetchResult::Response {
                status_code: status.as_u16(),
                content_type,
                body,
            },
            Err(e) => FetchResult::NetworkError {
                error: e.to_string(),
                kind: NetworkErrorKind::Body,
            },
        }
    }
}

fn classify_error(e: reqwest::Error) -> FetchResult {
    if e.is_timeout() {
        FetchResult::NetworkError {
            error: "Request timeout".to_string(),
            kind: NetworkErrorKind::Timeout,
        }
    } else if e.is_connect() {
        FetchResult::NetworkError {
            error: format!("Connection failed: {}", e),
            kind: NetworkErrorKind::Connect,
        }
    } else {
        FetchResult::NetworkError {
            error: e.to_string(),
            kind: NetworkErrorKind::Other,
        }
    }
}
