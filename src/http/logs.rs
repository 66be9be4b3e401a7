//! Admin logs API and DB helper.

use crate::{app::AppState, db};
use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

#[derive(Debug, Default, Deserialize)]
pub struct LogsParams {
  pub limit: Option<i64>,
}

pub async fn list_logs(
  State(state): State<AppState>,
  Query(params): Query<LogsParams>,
) -> impl IntoResponse {
  let limit = params.limit.unwrap_or(100);
  match db::logs::get_logs(&state.db, limit).await {
    Ok(logs) => Json(json!({ "success": true, "count": logs.len(), "data": logs })).into_response(),
    Err(e) => {
      error!("list_logs error: {e}");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "message": "Database error" })),
      )
        .into_response()
    }
  }
}

/// Handler-side activity entry without request metadata.
pub async fn log_db(state: &AppState, level: &str, message: &str) -> Result<(), sqlx::Error> {
  db::logs::log_activity(&state.db, level, message, None, None, None).await?;
  Ok(())
}
