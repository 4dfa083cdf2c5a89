//! Compute node operations, scoped to one pool

use super::require_id;
use crate::client::BatchClient;
use crate::error::Result;
use crate::models::ComputeNode;
use crate::options::{CallOptions, ContinuationOptions, ListOptions};
use crate::paging::Pager;
use crate::types::Method;

/// Operations on the compute nodes of one pool
pub struct NodeOperations<'a> {
    client: &'a BatchClient,
    pool_id: String,
}

impl<'a> NodeOperations<'a> {
    pub(crate) fn new(client: &'a BatchClient, pool_id: &str) -> Self {
        Self {
            client,
            pool_id: pool_id.to_string(),
        }
    }

    /// List the nodes in the pool
    pub fn list(&self, options: Option<ListOptions>) -> Result<Pager<ComputeNode>> {
        require_id("pool_id", &self.pool_id)?;
        self.client
            .list_pager(&format!("pools/{}/nodes", self.pool_id), options, Vec::new())
    }

    /// Resume a node listing from a continuation link
    pub fn list_next(
        &self,
        next_link: &str,
        options: Option<ContinuationOptions>,
    ) -> Result<Pager<ComputeNode>> {
        self.client.resume_pager(next_link, options)
    }

    /// Get one node
    pub async fn get(&self, node_id: &str, options: Option<CallOptions>) -> Result<ComputeNode> {
        require_id("pool_id", &self.pool_id)?;
        require_id("node_id", node_id)?;
        self.client
            .fetch_json(
                Method::GET,
                &format!("pools/{}/nodes/{node_id}", self.pool_id),
                options,
            )
            .await
    }
}
