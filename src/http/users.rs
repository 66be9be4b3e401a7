//! User management JSON APIs.

use crate::{app::AppState, db, http::logs::log_db};
use axum::{
  Json,
  extract::{Path as AxumPath, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct UserPayload {
  pub name: Option<String>,
  pub email: Option<String>,
  pub role: Option<String>,
}

impl UserPayload {
  /// Name and email are required and must be non-empty; role defaults to "user".
  fn fields(&self) -> Option<(&str, &str, &str)> {
    let name = self.name.as_deref().filter(|s| !s.is_empty())?;
    let email = self.email.as_deref().filter(|s| !s.is_empty())?;
    Some((name, email, self.role.as_deref().unwrap_or("user")))
  }
}

fn missing_fields() -> axum::response::Response {
  (
    StatusCode::BAD_REQUEST,
    Json(json!({ "success": false, "message": "Name and email are required" })),
  )
    .into_response()
}

fn db_failure(e: sqlx::Error, op: &str) -> axum::response::Response {
  error!("{op} error: {e}");
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(json!({ "success": false, "message": "Database error" })),
  )
    .into_response()
}

fn duplicate_email() -> axum::response::Response {
  (
    StatusCode::CONFLICT,
    Json(json!({ "success": false, "message": "Email already exists" })),
  )
    .into_response()
}

fn user_not_found() -> axum::response::Response {
  (
    StatusCode::NOT_FOUND,
    Json(json!({ "success": false, "message": "User not found" })),
  )
    .into_response()
}

pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
  match db::users::get_all_users(&state.db).await {
    Ok(users) => Json(json!({ "success": true, "count": users.len(), "data": users })).into_response(),
    Err(e) => db_failure(e, "list_users"),
  }
}

pub async fn get_user(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<i64>,
) -> impl IntoResponse {
  match db::users::get_user_by_id(&state.db, id).await {
    Ok(Some(user)) => Json(json!({ "success": true, "data": user })).into_response(),
    Ok(None) => user_not_found(),
    Err(e) => db_failure(e, "get_user"),
  }
}

pub async fn create_user(
  State(state): State<AppState>,
  Json(body): Json<UserPayload>,
) -> impl IntoResponse {
  let Some((name, email, role)) = body.fields() else {
    return missing_fields();
  };
  match db::users::create_user(&state.db, name, email, role).await {
    Ok(user) => {
      log_db(&state, "INFO", &format!("created user: {email}"))
        .await
        .ok();
      (
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "User created successfully", "data": user })),
      )
        .into_response()
    }
    Err(e) if db::is_unique_violation(&e) => duplicate_email(),
    Err(e) => db_failure(e, "create_user"),
  }
}

pub async fn update_user(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<i64>,
  Json(body): Json<UserPayload>,
) -> impl IntoResponse {
  let Some((name, email, role)) = body.fields() else {
    return missing_fields();
  };
  match db::users::update_user(&state.db, id, name, email, role).await {
    Ok(Some(user)) => {
      log_db(&state, "INFO", &format!("updated user: {id}"))
        .await
        .ok();
      Json(json!({ "success": true, "message": "User updated successfully", "data": user }))
        .into_response()
    }
    Ok(None) => user_not_found(),
    Err(e) if db::is_unique_violation(&e) => duplicate_email(),
    Err(e) => db_failure(e, "update_user"),
  }
}

pub async fn delete_user(
  State(state): State<AppState>,
  AxumPath(id): AxumPath<i64>,
) -> impl IntoResponse {
  match db::users::delete_user(&state.db, id).await {
    Ok(true) => {
      log_db(&state, "INFO", &format!("deleted user: {id}"))
        .await
        .ok();
      Json(json!({ "success": true, "message": "User deleted successfully" })).into_response()
    }
    Ok(false) => user_not_found(),
    Err(e) => db_failure(e, "delete_user"),
  }
}
