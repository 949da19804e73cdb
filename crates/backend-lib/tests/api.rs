// =========================
// crates/backend-lib/tests/api.rs
// =========================
//! End-to-end tests driving the router with `tower::ServiceExt::oneshot`.
use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use password_backend_lib::{charset::CharacterClass, create_router, policy, Settings};
use password_common::{
    ErrorBody, FullResponse, GeneratedPasswordResponse, HealthResponse, StrengthResponse,
    ValidationResponse,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_router(&Settings::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app(), request).await
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

fn assert_all_classes(password: &str) {
    for class in CharacterClass::ALL {
        assert!(class.present_in(password), "{class:?} missing");
    }
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<HealthResponse>(&body), HealthResponse::ok());
}

#[tokio::test]
async fn test_validate_route() {
    let (status, body) = post_json("/password/validate", json!({ "password": "Correct-Horse9" })).await;
    assert_eq!(status, StatusCode::OK);
    let response: ValidationResponse = parse(&body);
    assert!(response.overall_result);

    let (status, body) = post_json("/password/validate", json!({ "password": "Ab1!" })).await;
    assert_eq!(status, StatusCode::OK);
    let response: ValidationResponse = parse(&body);
    assert!(!response.length_ok);
    assert!(response.upper_ok && response.lower_ok && response.digit_ok && response.symbol_ok);
    assert!(!response.overall_result);
}

#[tokio::test]
async fn test_validate_rejects_empty_password() {
    let (status, body) = post_json("/password/validate", json!({ "password": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse::<ErrorBody>(&body).error.code, "VAL_001");
}

#[tokio::test]
async fn test_malformed_body_is_a_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/password/strength")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse::<ErrorBody>(&body).error.code, "VAL_002");

    let (status, _) = post_json("/password/validate", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_default_length() {
    let (status, body) = post_json("/password/generate", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let response: GeneratedPasswordResponse = parse(&body);
    assert_eq!(response.password.len(), policy().default_length);
    assert_all_classes(&response.password);
}

#[tokio::test]
async fn test_generate_requested_length() {
    let (status, body) = post_json("/password/generate", json!({ "length": 40 })).await;
    assert_eq!(status, StatusCode::OK);
    let response: GeneratedPasswordResponse = parse(&body);
    assert_eq!(response.password.len(), 40);
    assert_all_classes(&response.password);
}

#[tokio::test]
async fn test_generate_length_bounds() {
    let (status, _) = post_json("/password/generate", json!({ "length": 3 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Allowed by the request contract but above the policy maximum
    let (status, body) = post_json("/password/generate", json!({ "length": 200 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = parse(&body);
    assert_eq!(error.error.code, "VAL_001");
    assert!(error.error.message.contains("maximum"));

    let (status, _) = post_json("/password/generate", json!({ "length": 257 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_strength_route() {
    let (status, body) = post_json("/password/strength", json!({ "password": "Ab1!" })).await;
    assert_eq!(status, StatusCode::OK);
    let response: StrengthResponse = parse(&body);
    assert_eq!(response.score, 9);
    assert_eq!(response.label, "strong");

    let (status, body) = post_json("/password/strength", json!({ "password": "a" })).await;
    assert_eq!(status, StatusCode::OK);
    let response: StrengthResponse = parse(&body);
    assert_eq!(response.score, 0);
    assert_eq!(response.label, "weak");
}

#[tokio::test]
async fn test_full_with_supplied_password_is_not_echoed() {
    let (status, body) = post_json("/password/full", json!({ "password": "Ab1!" })).await;
    assert_eq!(status, StatusCode::OK);

    let raw: Value = serde_json::from_slice(&body).unwrap();
    assert!(raw["password"].is_null());

    let response: FullResponse = parse(&body);
    assert!(!response.validation.length_ok);
    assert!(!response.validation.overall_result);
    assert_eq!(response.strength.label, "strong");
}

#[tokio::test]
async fn test_full_generates_when_only_length_given() {
    let (status, body) = post_json("/password/full", json!({ "length": 20 })).await;
    assert_eq!(status, StatusCode::OK);

    let response: FullResponse = parse(&body);
    let password = response.password.expect("generated password returned");
    assert_eq!(password.len(), 20);
    assert_all_classes(&password);
    assert!(response.validation.overall_result);
}

#[tokio::test]
async fn test_full_with_empty_password_returns_generated() {
    let (status, body) = post_json("/password/full", json!({ "password": "", "length": 12 })).await;
    assert_eq!(status, StatusCode::OK);

    let response: FullResponse = parse(&body);
    let password = response.password.expect("generated password returned");
    assert_eq!(password.len(), 12);
    assert_all_classes(&password);
    assert!(response.validation.overall_result);
}

#[tokio::test]
async fn test_full_requires_password_or_length() {
    let (status, body) = post_json("/password/full", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = parse(&body);
    assert_eq!(error.error.code, "VAL_001");
    assert!(error.error.message.contains("either a password or a length"));
}

#[tokio::test]
async fn test_full_rejects_unknown_fields() {
    let (status, _) = post_json("/password/full", json!({ "length": 20, "extra": true })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_body_limit_applies() {
    let mut settings = Settings::default();
    settings.http.body_limit_bytes = 64;
    let app = create_router(&settings);

    let request = Request::builder()
        .method("POST")
        .uri("/password/strength")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "password": "x".repeat(500) }).to_string()))
        .unwrap();
    let (status, _) = send(app, request).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder()
        .uri("/password/nope")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
