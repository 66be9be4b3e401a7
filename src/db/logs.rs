//! Log repository: append-only activity log.

use crate::models::log::log_entry::LogEntry;
use chrono::Utc;
use sqlx::SqlitePool;

/// Append one activity entry and return its rowid.
pub async fn log_activity(
  pool: &SqlitePool,
  level: &str,
  message: &str,
  endpoint: Option<&str>,
  user_agent: Option<&str>,
  ip_address: Option<&str>,
) -> Result<i64, sqlx::Error> {
  let result = sqlx::query(
    "INSERT INTO logs (level, message, endpoint, user_agent, ip_address, created_at) VALUES (?, ?, ?, ?, ?, ?)",
  )
  .bind(level)
  .bind(message)
  .bind(endpoint)
  .bind(user_agent)
  .bind(ip_address)
  .bind(Utc::now())
  .execute(pool)
  .await?;
  Ok(result.last_insert_rowid())
}

/// Up to `limit` most recent entries, newest first.
///
/// `limit` is passed straight through to SQLite; non-positive values get
/// whatever LIMIT semantics the engine applies.
pub async fn get_logs(pool: &SqlitePool, limit: i64) -> Result<Vec<LogEntry>, sqlx::Error> {
  sqlx::query_as(
    "SELECT id, level, message, endpoint, user_agent, ip_address, created_at FROM logs ORDER BY created_at DESC, id DESC LIMIT ?",
  )
  .bind(limit)
  .fetch_all(pool)
  .await
}
