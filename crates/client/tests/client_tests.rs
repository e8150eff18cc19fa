//! Integration tests for [`RenderClient`] wiring: headers, base URL handling
//! and timeout behaviour.

mod common;

use std::time::Duration;

use common::*;
use render_client::RenderClient;
use secrecy::SecretString;
use wiremock::matchers::{header, method, path, query_param};

fn client_for(server: &MockServer) -> RenderClient {
    RenderClient::builder()
        .base_url(format!("{}/", server.uri()))
        .api_key(SecretString::new(TEST_API_KEY.to_string().into()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_client_sends_auth_and_accept_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services"))
        .and(header("Authorization", "Bearer rnd_test_key"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let services = client.list_services().await.unwrap();

    assert!(services.is_empty());
}

#[tokio::test]
async fn test_client_lists_latest_deploy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/srv-web01/deploys"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("deploys/list_deploys.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let deploys = client.list_deploys("srv-web01", Some(1)).await.unwrap();

    assert_eq!(deploys[0].status.as_deref(), Some("live"));
}

#[tokio::test]
async fn test_client_lists_jobs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/srv-cron01/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("jobs/list_jobs.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let jobs = client.list_jobs("srv-cron01").await.unwrap();

    assert_eq!(jobs.len(), 2);
}

#[tokio::test]
async fn test_client_timeout_is_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = RenderClient::builder()
        .base_url(mock_server.uri())
        .api_key(SecretString::new(TEST_API_KEY.to_string().into()))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.list_services().await.unwrap_err();
    assert!(err.is_request_error());
}

#[tokio::test]
async fn test_client_does_not_retry_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_services().await.unwrap_err();

    assert!(err.is_request_error());
}
