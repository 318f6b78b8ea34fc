use crate::forwarder;
use crate::models::{ForwardReport, ForwardRequest};
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared, read-only server state: the pooled HTTP client and the proxy's
/// base address.
pub struct AppState {
    pub http_client: reqwest::Client,
    pub proxy_base_url: String,
}

/// Console page: a static form that posts to `/api/forward`.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Pure adapter: decode the fields, run the forwarder, report the result
/// as-is. Always 200; the report's own `error` field carries failure.
pub async fn forward_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ForwardRequest>,
) -> Json<ForwardReport> {
    let report = forwarder::forward(&state.http_client, &state.proxy_base_url, request).await;
    Json(report)
}
