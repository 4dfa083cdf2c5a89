//! Pool models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pool of compute nodes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudPool {
    /// Unique identifier within the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// URL of the pool resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Opaque version tag, changes whenever the pool changes
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PoolState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_transition_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_state: Option<AllocationState>,

    /// Size of the virtual machines in the pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_dedicated_nodes: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dedicated_nodes: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_low_priority_nodes: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_auto_scale: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inter_node_communication: Option<bool>,
}

/// State of a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PoolState {
    Active,
    Deleting,
    Upgrading,
    /// A value this client version does not know; the server string is kept
    Unrecognized(String),
}

impl From<String> for PoolState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => Self::Active,
            "deleting" => Self::Deleting,
            "upgrading" => Self::Upgrading,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<PoolState> for String {
    fn from(state: PoolState) -> Self {
        match state {
            PoolState::Active => "active".to_string(),
            PoolState::Deleting => "deleting".to_string(),
            PoolState::Upgrading => "upgrading".to_string(),
            PoolState::Unrecognized(s) => s,
        }
    }
}

/// Whether the pool is resizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AllocationState {
    Steady,
    Resizing,
    Stopping,
    Unrecognized(String),
}

impl From<String> for AllocationState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "steady" => Self::Steady,
            "resizing" => Self::Resizing,
            "stopping" => Self::Stopping,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<AllocationState> for String {
    fn from(state: AllocationState) -> Self {
        match state {
            AllocationState::Steady => "steady".to_string(),
            AllocationState::Resizing => "resizing".to_string(),
            AllocationState::Stopping => "stopping".to_string(),
            AllocationState::Unrecognized(s) => s,
        }
    }
}
