//! Per-request activity logging middleware.

use crate::{app::AppState, db};
use axum::{
  extract::{ConnectInfo, Request, State},
  http::header,
  middleware::Next,
  response::Response,
};
use std::net::SocketAddr;
use tracing::error;

/// Record one `logs` row per inbound request.
///
/// Best effort: a failed write is reported to tracing and discarded, and the
/// request proceeds to its handler regardless.
pub async fn log_request(
  State(state): State<AppState>,
  ConnectInfo(addr): ConnectInfo<SocketAddr>,
  req: Request,
  next: Next,
) -> Response {
  let path = req.uri().path().to_string();
  let message = format!("{} {}", req.method(), path);
  let user_agent = req
    .headers()
    .get(header::USER_AGENT)
    .and_then(|v| v.to_str().ok())
    .map(str::to_string);
  let ip = addr.ip().to_string();

  if let Err(e) = db::logs::log_activity(
    &state.db,
    "INFO",
    &message,
    Some(&path),
    user_agent.as_deref(),
    Some(&ip),
  )
  .await
  {
    error!("activity log write failed: {e}");
  }

  next.run(req).await
}
