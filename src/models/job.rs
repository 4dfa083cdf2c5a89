//! Job models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job, the unit of task grouping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudJob {
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
    pub state: Option<JobState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_transition_time: Option<DateTime<Utc>>,

    /// Scheduling priority, -1000 (lowest) to 1000 (highest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_task_dependencies: Option<bool>,

    /// Pool the job's tasks run on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_info: Option<PoolInformation>,
}

/// Reference to the pool a job runs on
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
}

/// State of a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    Active,
    Disabling,
    Disabled,
    Enabling,
    Terminating,
    Completed,
    Deleting,
    Unrecognized(String),
}

impl From<String> for JobState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => Self::Active,
            "disabling" => Self::Disabling,
            "disabled" => Self::Disabled,
            "enabling" => Self::Enabling,
            "terminating" => Self::Terminating,
            "completed" => Self::Completed,
            "deleting" => Self::Deleting,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        match state {
            JobState::Active => "active".to_string(),
            JobState::Disabling => "disabling".to_string(),
            JobState::Disabled => "disabled".to_string(),
            JobState::Enabling => "enabling".to_string(),
            JobState::Terminating => "terminating".to_string(),
            JobState::Completed => "completed".to_string(),
            JobState::Deleting => "deleting".to_string(),
            JobState::Unrecognized(s) => s,
        }
    }
}
