//! Admin stats API.

use crate::{app::AppState, db};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
  match db::stats::get_stats(&state.db).await {
    Ok(stats) => Json(json!({ "success": true, "data": stats })).into_response(),
    Err(e) => {
      error!("get_stats error: {e}");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "message": "Database error" })),
      )
        .into_response()
    }
  }
}
