//! Job schedule operations

use super::require_id;
use crate::client::BatchClient;
use crate::error::Result;
use crate::models::CloudJobSchedule;
use crate::options::{CallOptions, ContinuationOptions, ListOptions};
use crate::paging::Pager;
use crate::types::Method;

/// Operations on the account's job schedules
pub struct JobScheduleOperations<'a> {
    client: &'a BatchClient,
}

impl<'a> JobScheduleOperations<'a> {
    pub(crate) fn new(client: &'a BatchClient) -> Self {
        Self { client }
    }

    /// List the job schedules in the account
    pub fn list(&self, options: Option<ListOptions>) -> Result<Pager<CloudJobSchedule>> {
        self.client.list_pager("jobschedules", options, Vec::new())
    }

    /// Resume a schedule listing from a continuation link
    pub fn list_next(
        &self,
        next_link: &str,
        options: Option<ContinuationOptions>,
    ) -> Result<Pager<CloudJobSchedule>> {
        self.client.resume_pager(next_link, options)
    }

    /// Get one job schedule
    pub async fn get(
        &self,
        schedule_id: &str,
        options: Option<CallOptions>,
    ) -> Result<CloudJobSchedule> {
        require_id("schedule_id", schedule_id)?;
        self.client
            .fetch_json(Method::GET, &format!("jobschedules/{schedule_id}"), options)
            .await
    }

    /// Delete a job schedule and the jobs it created
    pub async fn delete(&self, schedule_id: &str, options: Option<CallOptions>) -> Result<()> {
        require_id("schedule_id", schedule_id)?;
        self.client
            .send_expect(
                Method::DELETE,
                &format!("jobschedules/{schedule_id}"),
                None,
                options,
                &[202],
            )
            .await
    }
}
