//! Task operations, scoped to one job

use super::require_id;
use crate::client::BatchClient;
use crate::error::{Error, Result};
use crate::models::{CloudTask, TaskAddParameter};
use crate::options::{CallOptions, ContinuationOptions, ListOptions};
use crate::paging::Pager;
use crate::types::Method;

/// Operations on the tasks of one job
pub struct TaskOperations<'a> {
    client: &'a BatchClient,
    job_id: String,
}

impl<'a> TaskOperations<'a> {
    pub(crate) fn new(client: &'a BatchClient, job_id: &str) -> Self {
        Self {
            client,
            job_id: job_id.to_string(),
        }
    }

    /// List the tasks of the job
    pub fn list(&self, options: Option<ListOptions>) -> Result<Pager<CloudTask>> {
        require_id("job_id", &self.job_id)?;
        self.client
            .list_pager(&format!("jobs/{}/tasks", self.job_id), options, Vec::new())
    }

    /// Resume a task listing from a continuation link
    pub fn list_next(
        &self,
        next_link: &str,
        options: Option<ContinuationOptions>,
    ) -> Result<Pager<CloudTask>> {
        self.client.resume_pager(next_link, options)
    }

    /// Get one task
    pub async fn get(&self, task_id: &str, options: Option<CallOptions>) -> Result<CloudTask> {
        require_id("job_id", &self.job_id)?;
        require_id("task_id", task_id)?;
        self.client
            .fetch_json(
                Method::GET,
                &format!("jobs/{}/tasks/{task_id}", self.job_id),
                options,
            )
            .await
    }

    /// Add a task to the job
    pub async fn add(&self, task: &TaskAddParameter, options: Option<CallOptions>) -> Result<()> {
        require_id("job_id", &self.job_id)?;
        require_id("task.id", &task.id)?;
        let body = serde_json::to_value(task)
            .map_err(|e| Error::Other(format!("failed to serialize task: {e}")))?;
        self.client
            .send_expect(
                Method::POST,
                &format!("jobs/{}/tasks", self.job_id),
                Some(body),
                options,
                &[201],
            )
            .await
    }

    /// Delete a task
    pub async fn delete(&self, task_id: &str, options: Option<CallOptions>) -> Result<()> {
        require_id("job_id", &self.job_id)?;
        require_id("task_id", task_id)?;
        self.client
            .send_expect(
                Method::DELETE,
                &format!("jobs/{}/tasks/{task_id}", self.job_id),
                None,
                options,
                &[200],
            )
            .await
    }
}
