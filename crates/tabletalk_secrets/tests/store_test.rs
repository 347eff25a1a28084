//! Integration tests for secret bundle retrieval against a mock store.

use tabletalk_secrets::{Error, SecretStoreConfig, fetch_secret};

fn config_for(server: &mockito::Server) -> SecretStoreConfig {
    SecretStoreConfig::new(server.url(), "t-test-token")
}

#[tokio::test]
async fn fetch_returns_full_bundle() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/secret/data/openai/prod")
        .match_header("x-vault-token", "t-test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data": {"data": {"api_key": "sk-test-123", "org_id": "org-42"}}}"#,
        )
        .create_async()
        .await;

    let bundle = fetch_secret(&config_for(&server), "openai/prod")
        .await
        .unwrap();

    assert_eq!(bundle.name(), "openai/prod");
    assert_eq!(bundle.len(), 2);
    assert_eq!(bundle.require("api_key").unwrap(), "sk-test-123");
    mock.assert_async().await;
}

#[tokio::test]
async fn namespace_header_sent_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/secret/data/openai/prod")
        .match_header("x-vault-namespace", "analytics")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"data": {"api_key": "sk-test-123"}}}"#)
        .create_async()
        .await;

    let config = config_for(&server).with_namespace("analytics");
    fetch_secret(&config, "openai/prod").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn unknown_secret_maps_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/secret/data/missing")
        .with_status(404)
        .create_async()
        .await;

    let err = fetch_secret(&config_for(&server), "missing")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(name) if name == "missing"));
}

#[tokio::test]
async fn forbidden_maps_to_access_denied() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/secret/data/openai/prod")
        .with_status(403)
        .create_async()
        .await;

    let err = fetch_secret(&config_for(&server), "openai/prod")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AccessDenied(_)));
}

#[tokio::test]
async fn server_error_maps_to_unavailable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/secret/data/openai/prod")
        .with_status(503)
        .create_async()
        .await;

    let err = fetch_secret(&config_for(&server), "openai/prod")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unavailable(_)));
}

#[tokio::test]
async fn non_mapping_payload_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/secret/data/openai/prod")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": "not a mapping"}"#)
        .create_async()
        .await;

    let err = fetch_secret(&config_for(&server), "openai/prod")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MalformedPayload(_)));
}

#[tokio::test]
async fn empty_name_never_reaches_the_store() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = fetch_secret(&config_for(&server), "").await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    mock.assert_async().await;
}
