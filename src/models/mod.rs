//! Wire models for the Batch REST surface
//!
//! Plain data-transfer objects mirroring the service's JSON shapes, with a
//! representative subset of each resource's field catalog. State enums keep
//! an explicit `Unrecognized` case so forward-compatible server values are
//! preserved instead of silently dropped.

mod certificate;
mod error_body;
mod file;
mod job;
mod node;
mod pool;
mod schedule;
mod task;

pub use certificate::{Certificate, CertificateState};
pub use error_body::{BatchErrorBody, ErrorMessage, NameValuePair};
pub use file::{FileProperties, NodeFile};
pub use job::{CloudJob, JobState, PoolInformation};
pub use node::{ComputeNode, NodeState, SchedulingState};
pub use pool::{AllocationState, CloudPool, PoolState};
pub use schedule::{CloudJobSchedule, JobScheduleState, Schedule};
pub use task::{CloudTask, TaskAddParameter, TaskConstraints, TaskState};
