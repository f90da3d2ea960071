//! End-to-end tests for the /v1 router.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use poolcalc_api::{create_app, AppState};
use poolcalc_compliance::{CalculatorProfile, InstallationParameters, PoolType};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_app(AppState::new(CalculatorProfile::bs7671()).unwrap())
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

fn default_params() -> Value {
    serde_json::to_value(InstallationParameters::default()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["edition"], "BS 7671:2018+A2:2022");
}

#[tokio::test]
async fn test_calculate_returns_report_and_hash() {
    let response = app()
        .oneshot(post_json("/v1/pool/calculate", &default_params()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body["report"]["totalLoad"], 3470.0);
    assert_eq!(
        body["report"]["supplyRequirements"],
        "32A single phase supply (Type B MCB)"
    );
    assert!(body["reportHash"].as_str().unwrap().starts_with("blake3:"));
    assert!(body["requestId"].is_string());
}

#[tokio::test]
async fn test_calculate_hash_is_stable() {
    let app = app();
    let mut hashes = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json("/v1/pool/calculate", &default_params()))
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
        hashes.push(body["reportHash"].as_str().unwrap().to_string());
    }
    assert_eq!(hashes[0], hashes[1]);
}

#[tokio::test]
async fn test_calculate_strict_rejects_negative_power() {
    let mut params = default_params();
    params["heaterPower"] = json!(-100.0);

    let lenient = app()
        .oneshot(post_json("/v1/pool/calculate", &params))
        .await
        .unwrap();
    assert_eq!(lenient.status(), StatusCode::OK);

    let strict = app()
        .oneshot(post_json("/v1/pool/calculate?strict=true", &params))
        .await
        .unwrap();
    assert_eq!(strict.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&read_body(strict).await).unwrap();
    assert!(body["error"].as_str().unwrap().contains("heaterPower"));
}

#[tokio::test]
async fn test_validate_lists_violations() {
    let mut params = default_params();
    params["cableRun"] = json!(-5.0);
    params["pumpPower"] = json!(-1.0);

    let response = app()
        .oneshot(post_json("/v1/pool/validate", &params))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body["valid"], false);
    let fields: Vec<&str> = body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"cableRun"));
    assert!(fields.contains(&"pumpPower"));
}

#[tokio::test]
async fn test_report_renders_text() {
    let mut params = serde_json::to_value(InstallationParameters {
        pool_type: PoolType::Public,
        ..Default::default()
    })
    .unwrap();
    params["hasEmergencyStop"] = json!(false);

    let response = app()
        .oneshot(post_json(
            "/v1/pool/report",
            &json!({ "parameters": params, "template": "compliance_issues" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(read_body(response).await).unwrap();
    assert!(text.contains("Section 702: FAIL"));
}

#[tokio::test]
async fn test_report_accepts_overflowing_loads() {
    let mut params = default_params();
    params["heaterPower"] = json!(1e308);
    params["pumpPower"] = json!(1e308);
    params["lighting"] = json!(1e308);

    let calculate = app()
        .oneshot(post_json("/v1/pool/calculate", &params))
        .await
        .unwrap();
    assert_eq!(calculate.status(), StatusCode::OK);

    let response = app()
        .oneshot(post_json("/v1/pool/report", &json!({ "parameters": params })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(read_body(response).await).unwrap();
    assert!(text.contains("Total load: n/aW"));
}

#[tokio::test]
async fn test_report_unknown_template() {
    let response = app()
        .oneshot(post_json(
            "/v1/pool/report",
            &json!({ "parameters": default_params(), "template": "invoice" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_count_evaluations() {
    let app = app();
    app.clone()
        .oneshot(post_json("/v1/pool/calculate", &default_params()))
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let text = String::from_utf8(read_body(response).await).unwrap();
    assert!(text.contains(
        "poolcalc_evaluations_total{pool_type=\"private\",status=\"compliant\"} 1"
    ));
}
