mod common;

use common::{KEY, KEY_HEADER, api, client_for};
use httpmock::prelude::*;
use luis_programmatic::{LuisClientConfig, LuisError, LuisProgClient, Region, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_get_attaches_key_and_returns_status() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path(api("/apps")).header(KEY_HEADER, KEY);
        then.status(503).body("maintenance");
    });

    let client = client_for(&server);
    let response = client.transport().get("/apps").await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.text().unwrap(), "maintenance");

    mock.assert();
}

#[tokio::test]
async fn test_post_sends_json_and_returns_raw_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(api("/apps/a1/versions/0.1/intents"))
            .header(KEY_HEADER, KEY)
            .header("Content-Type", "application/json")
            .json_body(json!({"name": "Greeting"}));
        then.status(201).body("\"intent-1\"");
    });

    let client = client_for(&server);
    let raw = client
        .transport()
        .post("/apps/a1/versions/0.1/intents", Some(&json!({"name": "Greeting"})))
        .await
        .unwrap();

    assert_eq!(raw, "\"intent-1\"");

    mock.assert();
}

#[tokio::test]
async fn test_post_without_body_sends_nothing() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(api("/apps/a1/versions/0.1/train"))
            .header(KEY_HEADER, KEY)
            .header_missing("content-type")
            .body("");
        then.status(202).body(r#"{"statusId":9,"status":"Queued"}"#);
    });

    let client = client_for(&server);
    let raw = client
        .transport()
        .post::<()>("/apps/a1/versions/0.1/train", None)
        .await
        .unwrap();

    assert_eq!(raw, r#"{"statusId":9,"status":"Queued"}"#);

    mock.assert();
}

#[tokio::test]
async fn test_post_failure_decodes_service_error() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path(api("/apps"));
        then.status(409)
            .header("Content-Type", "application/json")
            .json_body(json!({"error": {"code": "Conflict", "message": "App exists"}}));
    });

    let client = client_for(&server);
    let err = client
        .transport()
        .post("/apps", Some(&json!({"name": "Demo"})))
        .await
        .unwrap_err();

    match err {
        LuisError::Service {
            status,
            code,
            message,
        } => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(code, "Conflict");
            assert_eq!(message, "App exists");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    mock.assert();
}

#[tokio::test]
async fn test_put_failure_with_undecodable_body_is_malformed() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(PUT).path(api("/apps/a1"));
        then.status(500).body("<html>Internal Server Error</html>");
    });

    let client = client_for(&server);
    let err = client
        .transport()
        .put("/apps/a1", &json!({"name": "Renamed"}))
        .await
        .unwrap_err();

    assert!(matches!(err, LuisError::MalformedResponse(_)));

    mock.assert();
}

#[tokio::test]
async fn test_delete_gateway_error() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(DELETE).path(api("/apps/a1"));
        then.status(401).json_body(json!({
            "statusCode": 401,
            "message": "Access denied due to invalid subscription key."
        }));
    });

    let client = client_for(&server);
    let err = client.transport().delete("/apps/a1").await.unwrap_err();

    assert_eq!(err.service_code(), Some("401"));
    assert!(!err.is_network());

    mock.assert();
}

#[tokio::test]
async fn test_delete_success_ignores_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(DELETE).path(api("/apps/a1")).header(KEY_HEADER, KEY);
        then.status(200)
            .json_body(json!({"code": "Success", "message": "Operation Successful"}));
    });

    let client = client_for(&server);
    client.transport().delete("/apps/a1").await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on port 1.
    let config = LuisClientConfig::new(Region::WestUs, KEY).with_base_url("http://127.0.0.1:1");
    let client = LuisProgClient::from_config(&config).unwrap();

    let err = client.get_all_apps().await.unwrap_err();

    assert!(err.is_network(), "unexpected error: {err:?}");
}
