//! Certificate models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A certificate installed on pool nodes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Hex thumbprint, the certificate's identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbprint: Option<String>,

    /// Algorithm the thumbprint was derived with (always sha1 today)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbprint_algorithm: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CertificateState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_transition_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_state: Option<CertificateState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_data: Option<String>,
}

/// State of a certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificateState {
    Active,
    Deleting,
    DeleteFailed,
    Unrecognized(String),
}

impl From<String> for CertificateState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => Self::Active,
            "deleting" => Self::Deleting,
            "deletefailed" => Self::DeleteFailed,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<CertificateState> for String {
    fn from(state: CertificateState) -> Self {
        match state {
            CertificateState::Active => "active".to_string(),
            CertificateState::Deleting => "deleting".to_string(),
            CertificateState::DeleteFailed => "deletefailed".to_string(),
            CertificateState::Unrecognized(s) => s,
        }
    }
}
