//! Tests for the paged collection fetcher

use super::*;
use crate::error::{Error, Result};
use crate::http::{PreparedRequest, Transport, TransportResponse};
use crate::options::{ContinuationOptions, ListOptions};
use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use reqwest::header::HeaderMap;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// ============================================================================
// In-memory transport
// ============================================================================

/// Transport fake that replays canned responses and records every request
#[derive(Default)]
struct FakeTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl FakeTransport {
    fn with_responses(responses: Vec<TransportResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn request(&self, index: usize) -> PreparedRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Other("unexpected extra request".to_string()))
    }
}

fn response(status: u16, body: Value) -> TransportResponse {
    TransportResponse {
        status,
        headers: HeaderMap::new(),
        body: Bytes::from(serde_json::to_vec(&body).unwrap()),
    }
}

fn page_body(items: Vec<&str>, next_link: Option<&str>) -> Value {
    let mut body = json!({ "value": items });
    if let Some(link) = next_link {
        body["odata.nextLink"] = json!(link);
    }
    body
}

fn pager_for(transport: Arc<FakeTransport>, first: PreparedRequest) -> Pager<Value> {
    Pager::new(transport, first, ContinuationOptions::default())
}

// ============================================================================
// Page normalization
// ============================================================================

#[test]
fn test_page_normalizes_empty_link_to_none() {
    let envelope: ListResponse<Value> =
        serde_json::from_value(json!({ "value": ["A"], "odata.nextLink": "" })).unwrap();
    let page = Page::from(envelope);
    assert!(!page.has_more());
    assert_eq!(page.next_link, None);
}

#[test]
fn test_page_keeps_present_link() {
    let envelope: ListResponse<Value> = serde_json::from_value(
        json!({ "value": [], "odata.nextLink": "https://acct.batch.example.com/pools?skip=2" }),
    )
    .unwrap();
    let page = Page::from(envelope);
    assert!(page.has_more());
}

#[test]
fn test_envelope_tolerates_missing_value_field() {
    let envelope: ListResponse<Value> = serde_json::from_value(json!({})).unwrap();
    assert!(envelope.value.is_empty());
    assert!(envelope.odata_next_link.is_none());
}

// ============================================================================
// Sequencing
// ============================================================================

#[tokio::test]
async fn test_two_pages_concatenate_in_order() {
    let transport = FakeTransport::with_responses(vec![
        response(200, page_body(vec!["A", "B"], Some("https://next.example.com/pools?t=T1"))),
        response(200, page_body(vec!["C"], None)),
    ]);

    let pager = pager_for(transport.clone(), PreparedRequest::get("/pools"));
    let items = pager.collect().await.unwrap();

    assert_eq!(items, vec![json!("A"), json!("B"), json!("C")]);
    assert_eq!(transport.calls(), 2);
    assert_eq!(transport.request(1).url, "https://next.example.com/pools?t=T1");
}

#[tokio::test]
async fn test_empty_page_with_link_fetches_exactly_one_more() {
    let transport = FakeTransport::with_responses(vec![
        response(200, page_body(vec![], Some("https://next.example.com/pools?t=T1"))),
        response(200, page_body(vec!["A"], None)),
    ]);

    let pager = pager_for(transport.clone(), PreparedRequest::get("/pools"));
    let items = pager.collect().await.unwrap();

    assert_eq!(items, vec![json!("A")]);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_empty_string_link_terminates() {
    let transport = FakeTransport::with_responses(vec![response(
        200,
        json!({ "value": ["A"], "odata.nextLink": "" }),
    )]);

    let pager = pager_for(transport.clone(), PreparedRequest::get("/pools"));
    let items = pager.collect().await.unwrap();

    assert_eq!(items, vec![json!("A")]);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_pull_mode_stops_early_without_further_calls() {
    let transport = FakeTransport::with_responses(vec![response(
        200,
        page_body(vec!["A"], Some("https://next.example.com/pools?t=T1")),
    )]);

    let mut pager = pager_for(transport.clone(), PreparedRequest::get("/pools"));
    let page = pager.next_page().await.unwrap().unwrap();
    assert!(page.has_more());
    drop(pager);

    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_next_page_after_done_returns_none() {
    let transport =
        FakeTransport::with_responses(vec![response(200, page_body(vec!["A"], None))]);

    let mut pager = pager_for(transport.clone(), PreparedRequest::get("/pools"));
    assert!(pager.next_page().await.unwrap().is_some());
    assert!(pager.next_page().await.unwrap().is_none());
    assert!(pager.next_page().await.unwrap().is_none());

    assert_eq!(transport.calls(), 1);
}

// ============================================================================
// Callback mode
// ============================================================================

#[tokio::test]
async fn test_stop_after_first_page_issues_one_call() {
    let transport = FakeTransport::with_responses(vec![response(
        200,
        page_body(vec!["A", "B"], Some("https://next.example.com/pools?t=T1")),
    )]);

    let pager = pager_for(transport.clone(), PreparedRequest::get("/pools"));
    let collected = pager.for_each_page(|_| PageControl::Stop).await.unwrap();

    assert_eq!(collected, vec![json!("A"), json!("B")]);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_callback_sees_pages_in_retrieval_order() {
    let transport = FakeTransport::with_responses(vec![
        response(200, page_body(vec!["A", "B"], Some("https://next.example.com/p?t=1"))),
        response(200, page_body(vec![], Some("https://next.example.com/p?t=2"))),
        response(200, page_body(vec!["C"], None)),
    ]);

    let mut seen = Vec::new();
    let pager = pager_for(transport.clone(), PreparedRequest::get("/pools"));
    let collected = pager
        .for_each_page(|items| {
            seen.push(items.len());
            PageControl::Continue
        })
        .await
        .unwrap();

    assert_eq!(seen, vec![2, 0, 1]);
    assert_eq!(collected, vec![json!("A"), json!("B"), json!("C")]);
    assert_eq!(transport.calls(), 3);
}

// ============================================================================
// Continuation isolation
// ============================================================================

#[tokio::test]
async fn test_continuation_carries_only_request_identity() {
    let transport = FakeTransport::with_responses(vec![
        response(200, page_body(vec!["A"], Some("https://next.example.com/pools?t=T1"))),
        response(200, page_body(vec!["B"], None)),
    ]);

    let options = ListOptions::new()
        .filter("state eq 'active'")
        .select("id")
        .max_results(2)
        .client_request_id("req-7")
        .return_client_request_id(true);

    let first = PreparedRequest::get("/pools")
        .query_pairs(options.query_pairs())
        .header_pairs(options.header_pairs());
    let pager: Pager<Value> = Pager::new(transport.clone(), first, options.continuation());
    pager.collect().await.unwrap();

    // The initiating request carries the projection parameters
    let initial = transport.request(0);
    assert!(initial.query.iter().any(|(k, _)| k == "$filter"));
    assert!(initial.query.iter().any(|(k, _)| k == "maxresults"));

    // The continuation request carries none of them, but keeps the identity headers
    let continuation = transport.request(1);
    assert!(continuation.query.is_empty());
    assert!(continuation
        .headers
        .contains(&("client-request-id".to_string(), "req-7".to_string())));
    assert!(continuation
        .headers
        .contains(&("return-client-request-id".to_string(), "true".to_string())));
}

// ============================================================================
// Resume
// ============================================================================

#[test]
fn test_resume_empty_link_fails_fast() {
    let transport = FakeTransport::with_responses(vec![]);
    let result = Pager::<Value>::resume(transport.clone(), "", ContinuationOptions::default());

    let err = result.err().unwrap();
    assert!(matches!(
        err,
        Error::InvalidArgument { ref param, .. } if param == "next_link"
    ));
    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_resume_fetches_from_link() {
    let transport = FakeTransport::with_responses(vec![response(
        200,
        page_body(vec!["C"], None),
    )]);

    let mut pager = Pager::<Value>::resume(
        transport.clone(),
        "https://next.example.com/pools?t=T1",
        ContinuationOptions::default(),
    )
    .unwrap();

    let page = tokio_test::block_on(pager.next_page()).unwrap().unwrap();
    assert_eq!(page.items, vec![json!("C")]);
    assert_eq!(transport.request(0).url, "https://next.example.com/pools?t=T1");
}

// ============================================================================
// Stream mode
// ============================================================================

#[tokio::test]
async fn test_stream_yields_items_across_pages() {
    let transport = FakeTransport::with_responses(vec![
        response(200, page_body(vec!["A", "B"], Some("https://next.example.com/p?t=1"))),
        response(200, page_body(vec!["C"], None)),
    ]);

    let pager = pager_for(transport.clone(), PreparedRequest::get("/pools"));
    let items: Vec<Value> = pager.into_stream().try_collect().await.unwrap();

    assert_eq!(items, vec![json!("A"), json!("B"), json!("C")]);
    assert_eq!(transport.calls(), 2);
}

// ============================================================================
// Error classification
// ============================================================================

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let transport = FakeTransport::with_responses(vec![TransportResponse {
        status: 200,
        headers: HeaderMap::new(),
        body: Bytes::from_static(b"not json at all"),
    }]);

    let mut pager = pager_for(transport, PreparedRequest::get("/pools"));
    let err = pager.next_page().await.err().unwrap();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_service_error_is_typed() {
    let transport = FakeTransport::with_responses(vec![response(
        409,
        json!({
            "code": "PoolBeingDeleted",
            "message": { "lang": "en-US", "value": "The specified pool is being deleted." }
        }),
    )]);

    let mut pager = pager_for(transport, PreparedRequest::get("/pools"));
    let err = pager.next_page().await.err().unwrap();
    match err {
        Error::Service {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 409);
            assert_eq!(code, "PoolBeingDeleted");
            assert_eq!(message, "The specified pool is being deleted.");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}
