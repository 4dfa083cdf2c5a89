//! HTTP transport implementation
//!
//! Provides the request description type, the `Transport` seam, and the
//! reqwest-backed client that actually dispatches calls:
//! - Request building with fixed query/header parameters
//! - Endpoint-relative URL resolution
//! - Status classification into typed results or a typed service error

use crate::error::{Error, Result};
use crate::models::BatchErrorBody;
use crate::types::Method;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Account endpoint all relative paths resolve against
    pub endpoint: Option<String>,
    /// Default request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("batchkit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the account endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    /// Set the default request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

// ============================================================================
// Prepared Request
// ============================================================================

/// One fully-described HTTP call
///
/// Built once per dispatch; the paged fetcher builds a fresh one for every
/// continuation link.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, or a path resolved against the client endpoint
    pub url: String,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl PreparedRequest {
    /// Create a new request for a method and URL
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add several query parameters
    #[must_use]
    pub fn query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Add several headers
    #[must_use]
    pub fn header_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.headers.extend(pairs);
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// Transport
// ============================================================================

/// A received response: status, headers, raw body
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Bytes,
}

impl TransportResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as (lossy) text, for error reporting
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The "execute this call, give me a response" seam
///
/// A transport succeeds whenever it obtained a response, including non-2xx
/// statuses; only wire-level failures are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Dispatch one request and return the raw response
    async fn execute(&self, request: PreparedRequest) -> Result<TransportResponse>;
}

// ============================================================================
// Reqwest-backed client
// ============================================================================

/// HTTP client backed by reqwest
///
/// No retries, no rate limiting; a request is dispatched exactly once.
pub struct BatchHttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl BatchHttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Resolve a path against the configured endpoint
    ///
    /// Absolute URLs (continuation links) pass through untouched.
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.endpoint {
            Some(endpoint) => {
                let endpoint = endpoint.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{endpoint}/{path}")
            }
            None => path.to_string(),
        }
    }
}

impl Default for BatchHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BatchHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchHttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for BatchHttpClient {
    async fn execute(&self, request: PreparedRequest) -> Result<TransportResponse> {
        let full_url = self.build_url(&request.url);
        let method: reqwest::Method = request.method.into();

        let mut req = self.client.request(method.clone(), &full_url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!("{} {} -> {}", method, full_url, status);

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

// ============================================================================
// Response decoding
// ============================================================================

/// Decode a 2xx response body into a typed value
///
/// Non-2xx responses become a typed service error; a 2xx body that does not
/// match the expected shape becomes a decode error.
pub fn decode_json<T: DeserializeOwned>(response: &TransportResponse) -> Result<T> {
    if !response.is_success() {
        return Err(service_error(response));
    }
    serde_json::from_slice(&response.body)
        .map_err(|e| Error::decode(format!("unexpected response body: {e}")))
}

/// Require one of the expected statuses, mapping anything else to a service error
pub fn expect_status(response: &TransportResponse, expected: &[u16]) -> Result<()> {
    if expected.contains(&response.status) {
        Ok(())
    } else {
        Err(service_error(response))
    }
}

/// Build a typed service error from a non-2xx response
///
/// The Batch error body carries a machine-readable code and a localized
/// message; an unparseable body degrades to the raw text.
pub fn service_error(response: &TransportResponse) -> Error {
    match serde_json::from_slice::<BatchErrorBody>(&response.body) {
        Ok(body) => Error::service(
            response.status,
            body.code.unwrap_or_else(|| "Unknown".to_string()),
            body.message
                .and_then(|m| m.value)
                .unwrap_or_else(|| response.text()),
        ),
        Err(_) => Error::service(response.status, "Unknown", response.text()),
    }
}
