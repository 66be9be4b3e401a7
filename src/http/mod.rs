//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
  Router,
  routing::{get, post},
};

pub mod logs;
pub mod middleware;
pub mod stats;
pub mod system;
pub mod users;

/// Assemble the HTTP router with all routes and the activity logger.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(system::index))
    .route("/health", get(system::health))
    .route("/echo", post(system::echo))
    .route("/users", get(users::list_users).post(users::create_user))
    .route(
      "/users/{id}",
      get(users::get_user)
        .put(users::update_user)
        .delete(users::delete_user),
    )
    .route("/admin/logs", get(logs::list_logs))
    .route("/admin/stats", get(stats::get_stats))
    .fallback(system::not_found)
    .layer(axum::middleware::from_fn_with_state(
      state.clone(),
      middleware::log_request,
    ))
    .with_state(state)
}
