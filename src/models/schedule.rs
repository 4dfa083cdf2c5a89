//! Job schedule models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A schedule that creates jobs on a recurrence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudJobSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<JobScheduleState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_transition_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

/// When jobs are created under a schedule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_run_until: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_run_after: Option<DateTime<Utc>>,

    /// Interval between jobs, ISO-8601 duration string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_interval: Option<String>,
}

/// State of a job schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobScheduleState {
    Active,
    Completed,
    Disabled,
    Terminating,
    Deleting,
    Unrecognized(String),
}

impl From<String> for JobScheduleState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            "disabled" => Self::Disabled,
            "terminating" => Self::Terminating,
            "deleting" => Self::Deleting,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<JobScheduleState> for String {
    fn from(state: JobScheduleState) -> Self {
        match state {
            JobScheduleState::Active => "active".to_string(),
            JobScheduleState::Completed => "completed".to_string(),
            JobScheduleState::Disabled => "disabled".to_string(),
            JobScheduleState::Terminating => "terminating".to_string(),
            JobScheduleState::Deleting => "deleting".to_string(),
            JobScheduleState::Unrecognized(s) => s,
        }
    }
}
