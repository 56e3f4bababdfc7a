use std::any::Any;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::error;

use super::log::DecisionLog;
use super::pipeline::{IntakeOutcome, IntakePipeline};
use super::response;

/// Router builder exposing the intake endpoint and the liveness greeting.
///
/// Every response carries the fixed CORS header set, OPTIONS on either route
/// answers the preflight with an empty 200, and any other method gets the
/// 405 body. Panics anywhere below are contained into the generic 500.
pub fn intake_router<L>(pipeline: Arc<IntakePipeline<L>>) -> Router
where
    L: DecisionLog + 'static,
{
    Router::new()
        .route(
            "/api/save-to-sheets",
            post(submit_handler::<L>)
                .options(preflight_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/api/hello",
            get(hello_handler)
                .options(preflight_handler)
                .fallback(method_not_allowed_handler),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
        ))
        .with_state(pipeline)
}

pub(crate) async fn submit_handler<L>(
    State(pipeline): State<Arc<IntakePipeline<L>>>,
    body: Bytes,
) -> Response
where
    L: DecisionLog + 'static,
{
    match pipeline.process(&body) {
        Ok(IntakeOutcome::Accepted { submission, .. }) => response::accepted(&submission),
        Ok(IntakeOutcome::Rejected(_)) => response::rejection(),
        Err(err) => response::validation_error(&err.into_report()),
    }
}

pub(crate) async fn hello_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello from the backend!" }))
}

pub(crate) async fn preflight_handler() -> Response {
    response::preflight()
}

pub(crate) async fn method_not_allowed_handler() -> Response {
    response::method_not_allowed()
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    error!("request handler panicked");
    response::internal_error()
}
