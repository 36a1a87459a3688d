//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with user agent and timeouts
//! - GET requests for page content
//! - Classifying transport failures into error values
//!
//! Failures never propagate as panics or crate errors. A fetch that cannot
//! produce a body yields `FetchResult::NetworkError`, and the run driver
//! treats the page as empty and moves on. There are no retries: a URL is
//! marked visited before it is fetched, so a failed URL is forgone for the
//! rest of the run.

use crate::config::FetchSettings;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
///
/// Any HTTP response, whatever its status code, yields `Success` with the
/// response body: an error page still has text worth searching and links
/// worth following. Only transport-level failures (connection, timeout,
/// body read) are `NetworkError`.
#[derive(Debug)]
pub enum FetchResult {
    /// The server responded and a body was read
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Network error (connection refused, timeout, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client from the fetch settings
///
/// # Arguments
///
/// * `settings` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use tern_dive::config::FetchSettings;
/// use tern_dive::crawler::build_http_client;
///
/// let client = build_http_client(&FetchSettings::default()).unwrap();
/// ```
pub fn build_http_client(settings: &FetchSettings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(Duration::from_secs(settings.timeout_secs))
        .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the outcome as a value
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// A FetchResult carrying the body or a classified transport error
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status_code = response.status().as_u16();
            match response.text().await {
                Ok(body) => FetchResult::Success { status_code, body },
                Err(e) => FetchResult::NetworkError {
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            // Classify error
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection failed".to_string()
            } else {
                e.to_string()
            };
            FetchResult::NetworkError { error }
        }
    }
}
