//! Pool operations

use super::require_id;
use crate::client::BatchClient;
use crate::error::Result;
use crate::models::CloudPool;
use crate::options::{CallOptions, ContinuationOptions, ListOptions};
use crate::paging::Pager;
use crate::types::Method;

/// Operations on the account's pools
pub struct PoolOperations<'a> {
    client: &'a BatchClient,
}

impl<'a> PoolOperations<'a> {
    pub(crate) fn new(client: &'a BatchClient) -> Self {
        Self { client }
    }

    /// List the pools in the account
    pub fn list(&self, options: Option<ListOptions>) -> Result<Pager<CloudPool>> {
        self.client.list_pager("pools", options, Vec::new())
    }

    /// Resume a pool listing from a continuation link
    pub fn list_next(
        &self,
        next_link: &str,
        options: Option<ContinuationOptions>,
    ) -> Result<Pager<CloudPool>> {
        self.client.resume_pager(next_link, options)
    }

    /// Get one pool
    pub async fn get(&self, pool_id: &str, options: Option<CallOptions>) -> Result<CloudPool> {
        require_id("pool_id", pool_id)?;
        self.client
            .fetch_json(Method::GET, &format!("pools/{pool_id}"), options)
            .await
    }

    /// Delete a pool; the service completes the deletion asynchronously
    pub async fn delete(&self, pool_id: &str, options: Option<CallOptions>) -> Result<()> {
        require_id("pool_id", pool_id)?;
        self.client
            .send_expect(
                Method::DELETE,
                &format!("pools/{pool_id}"),
                None,
                options,
                &[202],
            )
            .await
    }

    /// Check whether a pool exists
    pub async fn exists(&self, pool_id: &str, options: Option<CallOptions>) -> Result<bool> {
        require_id("pool_id", pool_id)?;
        self.client.probe(&format!("pools/{pool_id}"), options).await
    }
}
