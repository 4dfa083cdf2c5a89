//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: client config → typed operations →
//! paged listing across continuation links

use batchkit::models::{PoolState, TaskState};
use batchkit::{BatchClient, ClientConfig, Error, ListOptions, PageControl};
use futures::TryStreamExt;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BatchClient {
    BatchClient::new(ClientConfig::new(server.uri())).unwrap()
}

// ============================================================================
// Paged listing, end to end
// ============================================================================

#[tokio::test]
async fn test_three_page_pool_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pools"))
        .and(query_param("maxresults", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{ "id": "p1" }, { "id": "p2" }],
            "odata.nextLink": format!("{}/pools?skiptoken=page2", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pools"))
        .and(query_param("skiptoken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            // Legal: an empty page whose link still points onward
            "value": [],
            "odata.nextLink": format!("{}/pools?skiptoken=page3", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pools"))
        .and(query_param("skiptoken", "page3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{ "id": "p3", "state": "upgrading" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = ListOptions::new().max_results(2);
    let pools = client
        .pools()
        .list(Some(options))
        .unwrap()
        .collect()
        .await
        .unwrap();

    let ids: Vec<_> = pools.iter().filter_map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
    assert_eq!(pools[2].state, Some(PoolState::Upgrading));
    server.verify().await;
}

#[tokio::test]
async fn test_continuation_request_keeps_identity_headers_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("$filter", "state eq 'active'"))
        .and(header("client-request-id", "trace-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{ "id": "j1" }],
            "odata.nextLink": format!("{}/jobs-continued?skiptoken=z", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The continuation hits the link verbatim; the identity header rides along
    Mock::given(method("GET"))
        .and(path("/jobs-continued"))
        .and(query_param("skiptoken", "z"))
        .and(header("client-request-id", "trace-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{ "id": "j2" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = ListOptions::new()
        .filter("state eq 'active'")
        .client_request_id("trace-9");

    let jobs = client
        .jobs()
        .list(Some(options))
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(jobs.len(), 2);
    server.verify().await;
}

#[tokio::test]
async fn test_stop_after_first_page_stops_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/nightly/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{ "id": "t1", "state": "running" }],
            "odata.nextLink": format!("{}/jobs/nightly/tasks?skiptoken=more", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tasks = client
        .tasks("nightly")
        .list(None)
        .unwrap()
        .for_each_page(|_| PageControl::Stop)
        .await
        .unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].state, Some(TaskState::Running));
    // expect(1) on the mock asserts the continuation was never fetched
    server.verify().await;
}

#[tokio::test]
async fn test_item_stream_across_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/certificates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{ "thumbprint": "aa11" }],
            "odata.nextLink": format!("{}/certificates?skiptoken=2", server.uri())
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/certificates"))
        .and(query_param("skiptoken", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{ "thumbprint": "bb22" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let thumbprints: Vec<_> = client
        .certificates()
        .list(None)
        .unwrap()
        .into_stream()
        .try_collect::<Vec<_>>()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|c| c.thumbprint)
        .collect();

    assert_eq!(thumbprints, vec!["aa11", "bb22"]);
}

// ============================================================================
// Error surfaces
// ============================================================================

#[tokio::test]
async fn test_service_error_carries_code_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pools/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "odata.metadata": "https://acct.region.batch.example.com/$metadata#Microsoft.Azure.Batch.Protocol.Entities.Container.errors/@Element",
            "code": "PoolNotFound",
            "message": { "lang": "en-US", "value": "The specified pool does not exist." }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.pools().get("missing", None).await.err().unwrap();

    match err {
        Error::Service {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "PoolNotFound");
            assert_eq!(message, "The specified pool does not exist.");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_decode_error_on_non_json_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pools"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy interfered</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .pools()
        .list(None)
        .unwrap()
        .collect()
        .await
        .err()
        .unwrap();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_default_headers_reach_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(header("x-ms-tenant", "contoso"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri())
        .header("x-ms-tenant", "contoso")
        .timeout(Duration::from_secs(10));
    let client = BatchClient::new(config).unwrap();

    client
        .jobs()
        .list(None)
        .unwrap()
        .collect()
        .await
        .unwrap();
    server.verify().await;
}
