//! Integration tests for the deploy listing endpoint.

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};

#[tokio::test]
async fn test_list_deploys_with_limit() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("deploys/list_deploys.json");

    Mock::given(method("GET"))
        .and(path("/services/srv-web01/deploys"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let deploys = endpoints::list_deploys(
        &client,
        &mock_server.uri(),
        TEST_API_KEY,
        "srv-web01",
        Some(1),
    )
    .await
    .unwrap();

    assert_eq!(deploys.len(), 1);
    assert_eq!(deploys[0].id, "dep-0002");
    assert_eq!(deploys[0].status.as_deref(), Some("live"));
    assert_eq!(deploys[0].created_at.as_deref(), Some("2024-03-02T10:10:00Z"));
    assert_eq!(deploys[0].finished_at.as_deref(), Some("2024-03-02T10:14:30Z"));
}

#[tokio::test]
async fn test_list_deploys_without_limit_omits_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/srv-web01/deploys"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let deploys =
        endpoints::list_deploys(&client, &mock_server.uri(), TEST_API_KEY, "srv-web01", None)
            .await
            .unwrap();

    assert!(deploys.is_empty());
}

#[tokio::test]
async fn test_list_deploys_encodes_service_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/srv%2Fodd%20id/deploys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::list_deploys(
        &client,
        &mock_server.uri(),
        TEST_API_KEY,
        "srv/odd id",
        Some(1),
    )
    .await;

    assert!(result.is_ok(), "unexpected error: {:?}", result.err());
}

#[tokio::test]
async fn test_list_deploys_not_found_is_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/srv-gone/deploys"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "service not found"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::list_deploys(
        &client,
        &mock_server.uri(),
        TEST_API_KEY,
        "srv-gone",
        Some(1),
    )
    .await
    .unwrap_err();

    assert!(err.is_request_error());
    assert!(!err.is_parse_error());
}

#[tokio::test]
async fn test_list_deploys_wrong_envelope_key_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/srv-web01/deploys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"service": {"id": "srv-web01"}}
        ])))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::list_deploys(
        &client,
        &mock_server.uri(),
        TEST_API_KEY,
        "srv-web01",
        Some(1),
    )
    .await
    .unwrap_err();

    assert!(err.is_parse_error());
    assert!(err.to_string().contains("`deploy`"));
}
