//! Compute node models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A compute node in a pool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<NodeState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduling_state: Option<SchedulingState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_transition_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_boot_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_time: Option<DateTime<Utc>>,

    /// Address other nodes in the pool can reach this node at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks_run: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_tasks_count: Option<i32>,
}

/// State of a compute node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeState {
    Idle,
    Rebooting,
    Reimaging,
    Running,
    Unusable,
    Creating,
    Starting,
    WaitingForStartTask,
    StartTaskFailed,
    Unknown,
    LeavingPool,
    Offline,
    Preempted,
    Unrecognized(String),
}

impl From<String> for NodeState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "idle" => Self::Idle,
            "rebooting" => Self::Rebooting,
            "reimaging" => Self::Reimaging,
            "running" => Self::Running,
            "unusable" => Self::Unusable,
            "creating" => Self::Creating,
            "starting" => Self::Starting,
            "waitingforstarttask" => Self::WaitingForStartTask,
            "starttaskfailed" => Self::StartTaskFailed,
            "unknown" => Self::Unknown,
            "leavingpool" => Self::LeavingPool,
            "offline" => Self::Offline,
            "preempted" => Self::Preempted,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<NodeState> for String {
    fn from(state: NodeState) -> Self {
        match state {
            NodeState::Idle => "idle".to_string(),
            NodeState::Rebooting => "rebooting".to_string(),
            NodeState::Reimaging => "reimaging".to_string(),
            NodeState::Running => "running".to_string(),
            NodeState::Unusable => "unusable".to_string(),
            NodeState::Creating => "creating".to_string(),
            NodeState::Starting => "starting".to_string(),
            NodeState::WaitingForStartTask => "waitingforstarttask".to_string(),
            NodeState::StartTaskFailed => "starttaskfailed".to_string(),
            NodeState::Unknown => "unknown".to_string(),
            NodeState::LeavingPool => "leavingpool".to_string(),
            NodeState::Offline => "offline".to_string(),
            NodeState::Preempted => "preempted".to_string(),
            NodeState::Unrecognized(s) => s,
        }
    }
}

/// Whether a node accepts new tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchedulingState {
    Enabled,
    Disabled,
    Unrecognized(String),
}

impl From<String> for SchedulingState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "enabled" => Self::Enabled,
            "disabled" => Self::Disabled,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<SchedulingState> for String {
    fn from(state: SchedulingState) -> Self {
        match state {
            SchedulingState::Enabled => "enabled".to_string(),
            SchedulingState::Disabled => "disabled".to_string(),
            SchedulingState::Unrecognized(s) => s,
        }
    }
}
