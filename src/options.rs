//! Per-call operation options
//!
//! Every operation accepts an optional, all-nullable options struct. Absent
//! fields take server defaults. Listing operations additionally carry the
//! OData projection/paging fields; continuation fetches carry only the
//! request-identification subset, because the continuation link already
//! encodes the rest server-side.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Largest page-size hint the service accepts
pub const MAX_RESULTS_LIMIT: i32 = 1000;

/// Format a timestamp the way the `ocp-date` header wants it (RFC 1123)
fn format_ocp_date(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

// ============================================================================
// List Options
// ============================================================================

/// Options accepted by every collection-listing operation
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// OData `$filter` expression
    pub filter: Option<String>,
    /// OData `$select` projection
    pub select: Option<String>,
    /// OData `$expand` expansion
    pub expand: Option<String>,
    /// Page-size hint (`maxresults`); `None` means server default
    pub max_results: Option<i32>,
    /// Maximum server processing time, also applied as the transport timeout
    pub timeout: Option<Duration>,
    /// Caller-generated request identity, echoed in logs and diagnostics
    pub client_request_id: Option<String>,
    /// Ask the server to echo `client-request-id` in the response
    pub return_client_request_id: Option<bool>,
    /// Time the request was issued, sent as `ocp-date`
    pub ocp_date: Option<DateTime<Utc>>,
}

impl ListOptions {
    /// Create empty options (server defaults everywhere)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `$filter` expression
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the `$select` projection
    #[must_use]
    pub fn select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    /// Set the `$expand` expansion
    #[must_use]
    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Set the page-size hint
    #[must_use]
    pub fn max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the client request id
    #[must_use]
    pub fn client_request_id(mut self, id: impl Into<String>) -> Self {
        self.client_request_id = Some(id.into());
        self
    }

    /// Ask the server to echo the client request id
    #[must_use]
    pub fn return_client_request_id(mut self, echo: bool) -> Self {
        self.return_client_request_id = Some(echo);
        self
    }

    /// Set the request timestamp
    #[must_use]
    pub fn ocp_date(mut self, date: DateTime<Utc>) -> Self {
        self.ocp_date = Some(date);
        self
    }

    /// Validate each present field against its own domain constraint
    ///
    /// The first violation wins; fields left `None` are never checked.
    pub fn validate(&self) -> Result<()> {
        if let Some(max_results) = self.max_results {
            if !(1..=MAX_RESULTS_LIMIT).contains(&max_results) {
                return Err(Error::validation(
                    "maxresults",
                    format!("must be between 1 and {MAX_RESULTS_LIMIT}, got {max_results}"),
                ));
            }
        }
        validate_timeout(self.timeout)?;
        Ok(())
    }

    /// The subset of options a continuation fetch carries forward
    pub fn continuation(&self) -> ContinuationOptions {
        ContinuationOptions {
            client_request_id: self.client_request_id.clone(),
            return_client_request_id: self.return_client_request_id,
            ocp_date: self.ocp_date,
        }
    }

    /// Query parameters for the initiating request
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = &self.filter {
            pairs.push(("$filter".to_string(), filter.clone()));
        }
        if let Some(select) = &self.select {
            pairs.push(("$select".to_string(), select.clone()));
        }
        if let Some(expand) = &self.expand {
            pairs.push(("$expand".to_string(), expand.clone()));
        }
        if let Some(max_results) = self.max_results {
            pairs.push(("maxresults".to_string(), max_results.to_string()));
        }
        if let Some(timeout) = self.timeout {
            pairs.push(("timeout".to_string(), timeout.as_secs().to_string()));
        }
        pairs
    }

    /// Request-identification headers for the initiating request
    pub fn header_pairs(&self) -> Vec<(String, String)> {
        self.continuation().header_pairs()
    }
}

// ============================================================================
// Call Options
// ============================================================================

/// Options accepted by point operations (get, add, delete)
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Maximum server processing time, also applied as the transport timeout
    pub timeout: Option<Duration>,
    /// Caller-generated request identity
    pub client_request_id: Option<String>,
    /// Ask the server to echo `client-request-id` in the response
    pub return_client_request_id: Option<bool>,
    /// Time the request was issued, sent as `ocp-date`
    pub ocp_date: Option<DateTime<Utc>>,
}

impl CallOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the client request id
    #[must_use]
    pub fn client_request_id(mut self, id: impl Into<String>) -> Self {
        self.client_request_id = Some(id.into());
        self
    }

    /// Ask the server to echo the client request id
    #[must_use]
    pub fn return_client_request_id(mut self, echo: bool) -> Self {
        self.return_client_request_id = Some(echo);
        self
    }

    /// Set the request timestamp
    #[must_use]
    pub fn ocp_date(mut self, date: DateTime<Utc>) -> Self {
        self.ocp_date = Some(date);
        self
    }

    /// Validate each present field against its own domain constraint
    pub fn validate(&self) -> Result<()> {
        validate_timeout(self.timeout)
    }

    /// Query parameters for the request
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self.timeout {
            Some(timeout) => vec![("timeout".to_string(), timeout.as_secs().to_string())],
            None => Vec::new(),
        }
    }

    /// Request-identification headers for the request
    pub fn header_pairs(&self) -> Vec<(String, String)> {
        ContinuationOptions {
            client_request_id: self.client_request_id.clone(),
            return_client_request_id: self.return_client_request_id,
            ocp_date: self.ocp_date,
        }
        .header_pairs()
    }
}

// ============================================================================
// Continuation Options
// ============================================================================

/// The options a continuation fetch carries forward
///
/// Filter, select, expand and page size are deliberately absent: the
/// continuation link encodes them server-side.
#[derive(Debug, Clone, Default)]
pub struct ContinuationOptions {
    /// Caller-generated request identity
    pub client_request_id: Option<String>,
    /// Ask the server to echo `client-request-id` in the response
    pub return_client_request_id: Option<bool>,
    /// Time the request was issued, sent as `ocp-date`
    pub ocp_date: Option<DateTime<Utc>>,
}

impl ContinuationOptions {
    /// Request-identification headers
    pub fn header_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = &self.client_request_id {
            pairs.push(("client-request-id".to_string(), id.clone()));
        }
        if let Some(echo) = self.return_client_request_id {
            pairs.push(("return-client-request-id".to_string(), echo.to_string()));
        }
        if let Some(date) = &self.ocp_date {
            pairs.push(("ocp-date".to_string(), format_ocp_date(date)));
        }
        pairs
    }
}

fn validate_timeout(timeout: Option<Duration>) -> Result<()> {
    if let Some(timeout) = timeout {
        if timeout.as_secs() == 0 {
            return Err(Error::validation(
                "timeout",
                "must be at least one second".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case(1, true; "lower bound")]
    #[test_case(500, true; "mid range")]
    #[test_case(1000, true; "upper bound")]
    #[test_case(0, false; "zero")]
    #[test_case(-5, false; "negative")]
    #[test_case(1001, false; "over the limit")]
    fn test_max_results_validation(value: i32, ok: bool) {
        let options = ListOptions::new().max_results(value);
        assert_eq!(options.validate().is_ok(), ok);
    }

    #[test]
    fn test_timeout_validation() {
        assert!(ListOptions::new()
            .timeout(Duration::from_secs(30))
            .validate()
            .is_ok());

        let err = ListOptions::new()
            .timeout(Duration::from_millis(200))
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation { ref field, .. } if field == "timeout"
        ));
    }

    #[test]
    fn test_first_violation_wins() {
        let err = ListOptions::new()
            .max_results(0)
            .timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation { ref field, .. } if field == "maxresults"
        ));
    }

    #[test]
    fn test_query_pairs() {
        let options = ListOptions::new()
            .filter("state eq 'active'")
            .select("id,state")
            .max_results(50)
            .timeout(Duration::from_secs(20));

        let pairs = options.query_pairs();
        assert!(pairs.contains(&("$filter".to_string(), "state eq 'active'".to_string())));
        assert!(pairs.contains(&("$select".to_string(), "id,state".to_string())));
        assert!(pairs.contains(&("maxresults".to_string(), "50".to_string())));
        assert!(pairs.contains(&("timeout".to_string(), "20".to_string())));
    }

    #[test]
    fn test_continuation_drops_projection_fields() {
        let options = ListOptions::new()
            .filter("state eq 'active'")
            .select("id")
            .expand("stats")
            .max_results(10)
            .client_request_id("req-1")
            .return_client_request_id(true);

        let continuation = options.continuation();
        assert_eq!(continuation.client_request_id.as_deref(), Some("req-1"));
        assert_eq!(continuation.return_client_request_id, Some(true));

        let headers = continuation.header_pairs();
        assert_eq!(headers.len(), 2);
        assert!(headers.iter().all(|(k, _)| !k.starts_with('$')));
    }

    #[test]
    fn test_ocp_date_header_format() {
        let date = Utc.with_ymd_and_hms(2020, 3, 3, 12, 0, 0).unwrap();
        let headers = ListOptions::new().ocp_date(date).header_pairs();
        assert_eq!(
            headers,
            vec![(
                "ocp-date".to_string(),
                "Tue, 03 Mar 2020 12:00:00 GMT".to_string()
            )]
        );
    }

    #[test]
    fn test_empty_options_project_nothing() {
        let options = ListOptions::new();
        assert!(options.validate().is_ok());
        assert!(options.query_pairs().is_empty());
        assert!(options.header_pairs().is_empty());
    }
}
