//! The error body the service returns on non-2xx responses

use serde::{Deserialize, Serialize};

/// Structured error returned by the service
///
/// Only `code` is reliably machine-readable; `message.value` is localized
/// display text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchErrorBody {
    /// Machine-readable error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human-readable error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ErrorMessage>,

    /// Additional key/value details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<NameValuePair>>,
}

/// Localized error message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Language of the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A named detail value attached to a service error
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameValuePair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
