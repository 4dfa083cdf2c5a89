//! Task models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task within a job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudTask {
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
    pub state: Option<TaskState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_transition_time: Option<DateTime<Utc>>,

    /// Command line the task runs; not interpreted through a shell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_line: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<TaskConstraints>,
}

/// Parameters for adding a task to a job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAddParameter {
    /// Unique identifier within the job
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Command line the task runs
    pub command_line: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<TaskConstraints>,
}

impl TaskAddParameter {
    /// Create an add-task parameter from the two required fields
    pub fn new(id: impl Into<String>, command_line: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            command_line: command_line.into(),
            ..Default::default()
        }
    }
}

/// Execution constraints for a task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConstraints {
    /// Maximum wall-clock run time, ISO-8601 duration string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wall_clock_time: Option<String>,

    /// How long completed task data is retained, ISO-8601 duration string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_task_retry_count: Option<i32>,
}

/// State of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskState {
    Active,
    Preparing,
    Running,
    Completed,
    Unrecognized(String),
}

impl From<String> for TaskState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => Self::Active,
            "preparing" => Self::Preparing,
            "running" => Self::Running,
            "completed" => Self::Completed,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<TaskState> for String {
    fn from(state: TaskState) -> Self {
        match state {
            TaskState::Active => "active".to_string(),
            TaskState::Preparing => "preparing".to_string(),
            TaskState::Running => "running".to_string(),
            TaskState::Completed => "completed".to_string(),
            TaskState::Unrecognized(s) => s,
        }
    }
}
