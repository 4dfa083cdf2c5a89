//! File listing operations
//!
//! Files are listed either under a task's working directory or on a compute
//! node; both shapes share one operations type differing only in path.

use super::require_id;
use crate::client::BatchClient;
use crate::error::Result;
use crate::models::NodeFile;
use crate::options::{ContinuationOptions, ListOptions};
use crate::paging::Pager;

/// File listing under a task directory or on a node
pub struct FileOperations<'a> {
    client: &'a BatchClient,
    base_path: String,
    scope: (String, String),
}

impl<'a> FileOperations<'a> {
    pub(crate) fn for_task(client: &'a BatchClient, job_id: &str, task_id: &str) -> Self {
        Self {
            client,
            base_path: format!("jobs/{job_id}/tasks/{task_id}/files"),
            scope: (job_id.to_string(), task_id.to_string()),
        }
    }

    pub(crate) fn for_node(client: &'a BatchClient, pool_id: &str, node_id: &str) -> Self {
        Self {
            client,
            base_path: format!("pools/{pool_id}/nodes/{node_id}/files"),
            scope: (pool_id.to_string(), node_id.to_string()),
        }
    }

    /// List files, optionally recursing into subdirectories
    pub fn list(
        &self,
        recursive: Option<bool>,
        options: Option<ListOptions>,
    ) -> Result<Pager<NodeFile>> {
        let (parent, child) = &self.scope;
        require_id("parent_id", parent)?;
        require_id("child_id", child)?;

        let extra = match recursive {
            Some(recursive) => vec![("recursive".to_string(), recursive.to_string())],
            None => Vec::new(),
        };
        self.client.list_pager(&self.base_path, options, extra)
    }

    /// Resume a file listing from a continuation link
    pub fn list_next(
        &self,
        next_link: &str,
        options: Option<ContinuationOptions>,
    ) -> Result<Pager<NodeFile>> {
        self.client.resume_pager(next_link, options)
    }
}
