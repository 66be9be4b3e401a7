//! Application setup and runtime.

use crate::{db, http};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::net::SocketAddr;
use tracing::info;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub db: SqlitePool,
}

/// Start the HTTP server with configured environment.
///
/// Schema creation and seeding complete before the listener is bound;
/// a storage failure here is fatal and no request is ever accepted.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let db_url =
    std::env::var("USERHUB_DATABASE").unwrap_or_else(|_| "sqlite://userhub.db".to_string());
  let db_url = db::ensure_sqlite_path(&db_url);
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;
  db::ensure_schema(&pool).await?;
  db::seed_if_empty(&pool).await?;

  let state = AppState { db: pool.clone() };

  let app = http::build_router(state);

  let addr: SocketAddr = std::env::var("USERHUB_ADDR")
    .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
    .parse()?;

  info!("user API:        http://{}/users", addr);
  info!("activity logs:   http://{}/admin/logs", addr);
  info!("database stats:  http://{}/admin/stats", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(
    listener,
    app.into_make_service_with_connect_info::<SocketAddr>(),
  )
  .with_graceful_shutdown(shutdown_signal())
  .await?;

  pool.close().await;
  info!("database connection closed");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!("failed to listen for shutdown signal: {e}");
  }
}
