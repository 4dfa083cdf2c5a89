//! Job operations

use super::require_id;
use crate::client::BatchClient;
use crate::error::Result;
use crate::models::CloudJob;
use crate::options::{CallOptions, ContinuationOptions, ListOptions};
use crate::paging::Pager;
use crate::types::Method;

/// Operations on the account's jobs
pub struct JobOperations<'a> {
    client: &'a BatchClient,
}

impl<'a> JobOperations<'a> {
    pub(crate) fn new(client: &'a BatchClient) -> Self {
        Self { client }
    }

    /// List the jobs in the account
    pub fn list(&self, options: Option<ListOptions>) -> Result<Pager<CloudJob>> {
        self.client.list_pager("jobs", options, Vec::new())
    }

    /// Resume a job listing from a continuation link
    pub fn list_next(
        &self,
        next_link: &str,
        options: Option<ContinuationOptions>,
    ) -> Result<Pager<CloudJob>> {
        self.client.resume_pager(next_link, options)
    }

    /// Get one job
    pub async fn get(&self, job_id: &str, options: Option<CallOptions>) -> Result<CloudJob> {
        require_id("job_id", job_id)?;
        self.client
            .fetch_json(Method::GET, &format!("jobs/{job_id}"), options)
            .await
    }

    /// Delete a job and all of its tasks
    pub async fn delete(&self, job_id: &str, options: Option<CallOptions>) -> Result<()> {
        require_id("job_id", job_id)?;
        self.client
            .send_expect(
                Method::DELETE,
                &format!("jobs/{job_id}"),
                None,
                options,
                &[202],
            )
            .await
    }
}
