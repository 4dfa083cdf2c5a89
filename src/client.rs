//! The account client
//!
//! `BatchClient` is the root handle: it owns the shared transport and hands
//! out per-resource operation types. All request assembly that is identical
//! across resources (api-version, option projection, validation ordering)
//! lives here so the operation types stay mechanical.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{
    decode_json, expect_status, BatchHttpClient, HttpClientConfig, PreparedRequest, Transport,
};
use crate::operations::{
    CertificateOperations, FileOperations, JobOperations, JobScheduleOperations, NodeOperations,
    PoolOperations, TaskOperations,
};
use crate::options::{CallOptions, ContinuationOptions, ListOptions};
use crate::paging::Pager;
use crate::types::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Client for one Batch account
pub struct BatchClient {
    transport: Arc<BatchHttpClient>,
    config: ClientConfig,
}

impl BatchClient {
    /// Create a client from a configuration
    ///
    /// The endpoint must parse as a URL; the API version is checked per call
    /// so profiles loaded at runtime fail at the call site, before any
    /// network traffic.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.check()?;
        Url::parse(&config.endpoint)?;

        let mut builder = HttpClientConfig::builder()
            .endpoint(&config.endpoint)
            .timeout(config.timeout_duration());
        for (key, value) in &config.headers {
            builder = builder.header(key, value);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent);
        }

        Ok(Self {
            transport: Arc::new(BatchHttpClient::with_config(builder.build())),
            config,
        })
    }

    /// Create a client for an endpoint with default configuration
    pub fn from_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(endpoint))
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn transport(&self) -> Arc<dyn Transport> {
        self.transport.clone()
    }

    fn api_version(&self) -> Result<&str> {
        if self.config.api_version.is_empty() {
            return Err(Error::config("api version is required"));
        }
        Ok(&self.config.api_version)
    }

    // ========================================================================
    // Resource accessors
    // ========================================================================

    /// Operations on the account's pools
    pub fn pools(&self) -> PoolOperations<'_> {
        PoolOperations::new(self)
    }

    /// Operations on the account's jobs
    pub fn jobs(&self) -> JobOperations<'_> {
        JobOperations::new(self)
    }

    /// Operations on the tasks of one job
    pub fn tasks<'a>(&'a self, job_id: &str) -> TaskOperations<'a> {
        TaskOperations::new(self, job_id)
    }

    /// Operations on the account's certificates
    pub fn certificates(&self) -> CertificateOperations<'_> {
        CertificateOperations::new(self)
    }

    /// Operations on the account's job schedules
    pub fn job_schedules(&self) -> JobScheduleOperations<'_> {
        JobScheduleOperations::new(self)
    }

    /// Operations on the compute nodes of one pool
    pub fn nodes<'a>(&'a self, pool_id: &str) -> NodeOperations<'a> {
        NodeOperations::new(self, pool_id)
    }

    /// File listing under one task's directory
    pub fn task_files<'a>(&'a self, job_id: &str, task_id: &str) -> FileOperations<'a> {
        FileOperations::for_task(self, job_id, task_id)
    }

    /// File listing on one compute node
    pub fn node_files<'a>(&'a self, pool_id: &str, node_id: &str) -> FileOperations<'a> {
        FileOperations::for_node(self, pool_id, node_id)
    }

    // ========================================================================
    // Request assembly (shared by all operation types)
    // ========================================================================

    /// Build the pager for a collection path
    ///
    /// Everything local happens here, in order: API version check, option
    /// validation, request assembly. The first network call is deferred to
    /// the first page pull.
    pub(crate) fn list_pager<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<ListOptions>,
        extra_query: Vec<(String, String)>,
    ) -> Result<Pager<T>> {
        let api_version = self.api_version()?;
        let options = options.unwrap_or_default();
        options.validate()?;

        let request = PreparedRequest::get(path)
            .query("api-version", api_version)
            .query_pairs(extra_query)
            .query_pairs(options.query_pairs())
            .header_pairs(options.header_pairs())
            .timeout(options.timeout);

        Ok(Pager::new(self.transport(), request, options.continuation()))
    }

    /// Resume a collection pager from a continuation link
    pub(crate) fn resume_pager<T: DeserializeOwned>(
        &self,
        next_link: &str,
        options: Option<ContinuationOptions>,
    ) -> Result<Pager<T>> {
        Pager::resume(self.transport(), next_link, options.unwrap_or_default())
    }

    fn point_request(
        &self,
        method: Method,
        path: &str,
        options: &CallOptions,
    ) -> Result<PreparedRequest> {
        let api_version = self.api_version()?;
        options.validate()?;

        Ok(PreparedRequest::new(method, path)
            .query("api-version", api_version)
            .query_pairs(options.query_pairs())
            .header_pairs(options.header_pairs())
            .timeout(options.timeout))
    }

    /// Execute a point call and decode the 2xx body
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: Option<CallOptions>,
    ) -> Result<T> {
        let request = self.point_request(method, path, &options.unwrap_or_default())?;
        let response = self.transport.execute(request).await?;
        decode_json(&response)
    }

    /// Execute a point call and require one of the expected statuses
    pub(crate) async fn send_expect(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: Option<CallOptions>,
        expected: &[u16],
    ) -> Result<()> {
        let mut request = self.point_request(method, path, &options.unwrap_or_default())?;
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.transport.execute(request).await?;
        expect_status(&response, expected)
    }

    /// Execute a HEAD-style existence probe
    pub(crate) async fn probe(
        &self,
        path: &str,
        options: Option<CallOptions>,
    ) -> Result<bool> {
        let request = self.point_request(Method::HEAD, path, &options.unwrap_or_default())?;
        let response = self.transport.execute(request).await?;
        match response.status {
            404 => Ok(false),
            _ if response.is_success() => Ok(true),
            _ => Err(crate::http::service_error(&response)),
        }
    }
}

impl std::fmt::Debug for BatchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchClient")
            .field("endpoint", &self.config.endpoint)
            .field("api_version", &self.config.api_version)
            .finish_non_exhaustive()
    }
}
