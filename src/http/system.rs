//! Service index, health check, echo and the 404 fallback.

use axum::{
  Json,
  http::{HeaderMap, Method, StatusCode, Uri},
  response::IntoResponse,
};
use chrono::Utc;
use serde_json::{Value, json};
use std::collections::HashMap;

const ENDPOINTS: &[&str] = &[
  "GET /",
  "GET /health",
  "GET /users",
  "POST /users",
  "GET /users/{id}",
  "PUT /users/{id}",
  "DELETE /users/{id}",
  "POST /echo",
  "GET /admin/logs",
  "GET /admin/stats",
];

pub async fn index() -> impl IntoResponse {
  Json(json!({
    "message": "userhub API server",
    "version": env!("CARGO_PKG_VERSION"),
    "endpoints": ENDPOINTS,
  }))
}

pub async fn health() -> impl IntoResponse {
  Json(json!({
    "status": "healthy",
    "timestamp": Utc::now(),
    "version": env!("CARGO_PKG_VERSION"),
  }))
}

pub async fn echo(method: Method, headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
  let headers: HashMap<String, String> = headers
    .iter()
    .filter_map(|(k, v)| v.to_str().ok().map(|s| (k.to_string(), s.to_string())))
    .collect();
  Json(json!({
    "message": "Echo response",
    "receivedData": body,
    "timestamp": Utc::now(),
    "method": method.as_str(),
    "headers": headers,
  }))
}

pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
  (
    StatusCode::NOT_FOUND,
    Json(json!({
      "success": false,
      "message": "Endpoint not found",
      "requestedPath": uri.path(),
      "method": method.as_str(),
      "availableEndpoints": ENDPOINTS,
    })),
  )
}
