use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::common::{accepted_body, encode, rejection_body, RecordingLog};
use crate::intake::decoder::SchemaPolicy;
use crate::intake::pipeline::IntakePipeline;
use crate::intake::response::{REJECTION_MESSAGE, SUCCESS_MESSAGE};
use crate::intake::router::intake_router;

fn build_router() -> (axum::Router, RecordingLog) {
    let log = RecordingLog::default();
    let pipeline = Arc::new(IntakePipeline::new(
        SchemaPolicy::strict(),
        Arc::new(log.clone()),
    ));
    (intake_router(pipeline), log)
}

fn post_intake(payload: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/save-to-sheets")
        .header("content-type", "application/json")
        .body(Body::from(payload))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn accepted_submission_returns_success_with_echo() {
    let (router, _) = build_router();

    let response = router
        .oneshot(post_intake(encode(&accepted_body())))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["success"], Value::Bool(true));
    assert_eq!(payload["message"], SUCCESS_MESSAGE);
    assert_eq!(payload["data"]["businessDescription"], "3_to_5_years");
    assert_eq!(payload["data"]["openToContact"], Value::Bool(true));
}

#[tokio::test]
async fn rejected_submission_returns_fixed_message() {
    let (router, log) = build_router();

    let response = router
        .oneshot(post_intake(encode(&rejection_body())))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = json_body(response).await;
    assert_eq!(payload["success"], Value::Bool(false));
    assert_eq!(payload["message"], REJECTION_MESSAGE);
    assert_eq!(log.records()[0].decision, "rejected");
}

#[tokio::test]
async fn malformed_body_returns_validation_error_not_500() {
    let (router, _) = build_router();

    let response = router
        .oneshot(post_intake(b"{broken".to_vec()))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = json_body(response).await;
    assert_eq!(payload["message"], "Validation error");
    assert_eq!(payload["errors"][0]["field"], "body");
}

#[tokio::test]
async fn hello_route_returns_greeting() {
    let (router, _) = build_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/hello")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["message"], "Hello from the backend!");
}

#[tokio::test]
async fn wrong_method_gets_the_405_body() {
    let (router, _) = build_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/save-to-sheets")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let payload = json_body(response).await;
    assert_eq!(payload["message"], "Method not allowed");
}

#[tokio::test]
async fn preflight_is_empty_200_with_cors_headers() {
    let (router, _) = build_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/save-to-sheets")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers().clone();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );

    let bytes = to_bytes(response.into_body(), 1024).await.expect("body");
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn cors_headers_are_present_on_every_response() {
    let (router, _) = build_router();

    let response = router
        .oneshot(post_intake(encode(&rejection_body())))
        .await
        .expect("router dispatch");

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
}
