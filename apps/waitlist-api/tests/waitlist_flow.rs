//! End-to-end waitlist flow: router + SupabaseStore + mocked store

use std::sync::Arc;

use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use waitlist_api::{router, AppState, FallbackLog, StoreConfig, SupabaseStore};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(mock_server: &MockServer, fallback: FallbackLog) -> TestServer {
    let config = StoreConfig::new(&mock_server.uri(), "test-anon-key").unwrap();
    let store = SupabaseStore::new(&config).unwrap();
    TestServer::new(router(AppState::new(Arc::new(store), fallback))).unwrap()
}

#[tokio::test]
async fn signup_against_missing_table_is_logged_and_acknowledged() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/waitlist"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "42P01",
            "message": "relation \"public.waitlist\" does not exist"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("pending.jsonl");
    let server = server_for(&mock_server, FallbackLog::with_file(&log_path));

    let response = server
        .post("/api/waitlist")
        .json(&json!({ "email": "early@bird.test", "business_type": "Construction" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["note"], "Table will be created automatically");

    let logged = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(logged.lines().count(), 1);
    assert!(logged.contains("early@bird.test"));
    assert!(logged.contains("Construction"));
}

#[tokio::test]
async fn signup_success_returns_store_rows() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/waitlist"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!([{ "id": 3, "email": "owner@acme.test" }])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = server_for(&mock_server, FallbackLog::new());
    let response = server
        .post("/api/waitlist")
        .json(&json!({ "email": "owner@acme.test" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "success": true,
            "message": "Successfully joined waitlist!",
            "data": [{ "id": 3, "email": "owner@acme.test" }]
        })
    );
}

#[tokio::test]
async fn empty_email_never_reaches_the_store() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let server = server_for(&mock_server, FallbackLog::new());
    let response = server
        .post("/api/waitlist")
        .json(&json!({ "email": "", "company_name": "Acme" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>(), json!({ "error": "Email is required" }));
}

#[tokio::test]
async fn store_failure_is_surfaced_once_without_retry() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/waitlist"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid API key"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = server_for(&mock_server, FallbackLog::new());
    let response = server
        .post("/api/waitlist")
        .json(&json!({ "email": "owner@acme.test" }))
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "error": "Invalid API key" }));
}
