//! Integration tests for the Appraisal Sandbox HTTP API.
//!
//! Uses axum-test to drive the router without binding a real port.

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use appraisal_api::{create_router, server::build_app};
use appraisal_core::{Config, HealthStatus, Valuation};

fn create_test_server() -> TestServer {
    TestServer::new(create_router()).unwrap()
}

async fn post_run(server: &TestServer, body: Value) -> Valuation {
    let response = server.post("/run").json(&body).await;
    response.assert_status_ok();
    response.json()
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "ok"}));
}

#[tokio::test]
async fn test_health_unaffected_by_prior_requests() {
    let server = create_test_server();

    server.post("/run").json(&json!({"asset": "villa"})).await;
    server.post("/run").text("garbage").await;

    let health: HealthStatus = server.get("/health").await.json();
    assert_eq!(health, HealthStatus::ok());
}

// =============================================================================
// RUN
// =============================================================================

#[tokio::test]
async fn test_run_villa() {
    let server = create_test_server();

    let response = server.post("/run").json(&json!({"asset": "Lakeside Villa"})).await;

    response.assert_status_ok();
    response.assert_json(&json!({"estimated_value": 110000.0, "confidence": 0.9}));
}

#[tokio::test]
async fn test_run_land() {
    let server = create_test_server();

    let response = server.post("/run").json(&json!({"asset": "Farmland plot"})).await;

    response.assert_status_ok();
    response.assert_json(&json!({"estimated_value": 90000.0, "confidence": 0.9}));
}

#[tokio::test]
async fn test_run_empty_object_uses_default() {
    let server = create_test_server();

    let response = server.post("/run").json(&json!({})).await;

    response.assert_status_ok();
    response.assert_json(&json!({"estimated_value": 100000.0, "confidence": 0.9}));
}

#[tokio::test]
async fn test_run_body_is_exact_float_text() {
    let server = create_test_server();

    let response = server.post("/run").json(&json!({"asset": "VILLA"})).await;

    assert_eq!(
        response.text(),
        r#"{"estimated_value":110000.0,"confidence":0.9}"#
    );
}

#[tokio::test]
async fn test_run_case_insensitive_and_villa_first() {
    let server = create_test_server();

    let cases = [
        ("VILLA", 110000.0),
        ("villa on the land", 110000.0),
        ("Highland cabin", 90000.0),
        ("apartment", 100000.0),
        ("", 100000.0),
    ];

    for (asset, expected) in cases {
        let valuation = post_run(&server, json!({ "asset": asset })).await;
        assert_eq!(valuation.estimated_value, expected, "asset {asset:?}");
        assert_eq!(valuation.confidence, 0.9);
    }
}

#[tokio::test]
async fn test_run_tolerates_other_shapes() {
    let server = create_test_server();

    for body in [
        json!({"asset": 12}),
        json!({"asset": null}),
        json!({"asset": ["villa"]}),
        json!({"property": "villa"}),
        json!(["villa"]),
        json!("villa"),
    ] {
        let valuation = post_run(&server, body).await;
        assert_eq!(valuation.estimated_value, 100000.0);
        assert_eq!(valuation.confidence, 0.9);
    }
}

#[tokio::test]
async fn test_run_tolerates_malformed_body() {
    let server = create_test_server();

    let response = server.post("/run").text("{\"asset\": \"villa\"").await;

    response.assert_status_ok();
    let valuation: Valuation = response.json();
    assert_eq!(valuation.estimated_value, 100000.0);
}

#[tokio::test]
async fn test_run_without_body() {
    let server = create_test_server();

    let response = server.post("/run").await;

    response.assert_status_ok();
    let valuation: Valuation = response.json();
    assert_eq!(valuation.estimated_value, 100000.0);
}

#[tokio::test]
async fn test_run_rejects_get() {
    let server = create_test_server();

    let response = server.get("/run").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = create_test_server();

    let response = server.get("/valuation").await;

    response.assert_status_not_found();
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

#[tokio::test]
async fn test_full_app_serves_same_routes() {
    let app = build_app(&Config::default()).unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server.post("/run").json(&json!({"asset": "Farmland plot"})).await;
    response.assert_status_ok();
    response.assert_json(&json!({"estimated_value": 90000.0, "confidence": 0.9}));
}

#[tokio::test]
async fn test_permissive_cors_by_default() {
    let app = build_app(&Config::default()).unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://anywhere.test"))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[tokio::test]
async fn test_configured_cors_origin_is_echoed() {
    let mut config = Config::default();
    config.api.allowed_origins = Some(vec!["http://localhost:3000".to_string()]);
    let server = TestServer::new(build_app(&config).unwrap()).unwrap();

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .await;

    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:3000"
    );
}
