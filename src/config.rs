//! Client configuration
//!
//! A `ClientConfig` describes one Batch account connection: the endpoint,
//! the API version every request carries, and transport defaults. The CLI
//! loads the same structure from a YAML profile file or environment
//! variables.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// API version sent with every request unless overridden
pub const DEFAULT_API_VERSION: &str = "2023-11-01.18.0";

/// Environment variable holding the account endpoint
pub const ENDPOINT_ENV: &str = "BATCHKIT_ENDPOINT";

/// Environment variable overriding the API version
pub const API_VERSION_ENV: &str = "BATCHKIT_API_VERSION";

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Configuration for one Batch account client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account endpoint, e.g. `https://myaccount.westus.batch.azure.com`
    pub endpoint: String,

    /// Value of the `api-version` query parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Default request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra headers applied to every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a config for an endpoint with defaults everywhere else
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            headers: HashMap::new(),
            user_agent: None,
        }
    }

    /// Override the API version
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Override the default request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Add a header applied to every request
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Default request timeout as a `Duration`
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load a profile from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&text)?;
        config.check()?;
        Ok(config)
    }

    /// Build a profile from `BATCHKIT_ENDPOINT` / `BATCHKIT_API_VERSION`
    pub fn from_env() -> Result<Self> {
        let endpoint =
            std::env::var(ENDPOINT_ENV).map_err(|_| Error::missing_field("endpoint"))?;
        let mut config = Self::new(endpoint);
        if let Ok(api_version) = std::env::var(API_VERSION_ENV) {
            config.api_version = api_version;
        }
        config.check()?;
        Ok(config)
    }

    /// Reject profiles that cannot possibly work
    pub fn check(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::missing_field("endpoint"));
        }
        Ok(())
    }
}
