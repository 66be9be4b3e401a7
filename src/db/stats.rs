//! Database statistics.

use crate::models::stats::db_stats::DbStats;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;

/// Compute the four scalar counts.
///
/// Four independent, non-transactional queries: under concurrent writes the
/// counts may be mutually inconsistent. That approximation is intentional.
pub async fn get_stats(pool: &SqlitePool) -> Result<DbStats, sqlx::Error> {
  let (total_users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
    .fetch_one(pool)
    .await?;
  let (total_logs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM logs")
    .fetch_one(pool)
    .await?;
  let (admin_users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = 'admin'")
    .fetch_one(pool)
    .await?;

  // Cutoff bound from Rust so both sides of the comparison share the same
  // text encoding as the stored timestamps.
  let one_hour_ago = Utc::now() - Duration::hours(1);
  let (recent_logs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM logs WHERE created_at > ?")
    .bind(one_hour_ago)
    .fetch_one(pool)
    .await?;

  Ok(DbStats {
    total_users,
    admin_users,
    total_logs,
    recent_logs,
  })
}
