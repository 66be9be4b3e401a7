//! User repository: CRUD over the `users` table.
//!
//! Missing rows come back as `None`/`false`; constraint and storage failures
//! always propagate as `sqlx::Error`.

use crate::models::user::user_record::User;
use chrono::Utc;
use sqlx::SqlitePool;

const SELECT_USER: &str =
  "SELECT id, name, email, role, created_at, updated_at FROM users WHERE id = ?";

/// Insert a user and return the stored row, including its assigned id.
///
/// Fails with a UNIQUE violation when the email already exists.
pub async fn create_user(
  pool: &SqlitePool,
  name: &str,
  email: &str,
  role: &str,
) -> Result<User, sqlx::Error> {
  let now = Utc::now();
  let result =
    sqlx::query("INSERT INTO users (name, email, role, created_at, updated_at) VALUES (?, ?, ?, ?, ?)")
      .bind(name)
      .bind(email)
      .bind(role)
      .bind(now)
      .bind(now)
      .execute(pool)
      .await?;

  sqlx::query_as(SELECT_USER)
    .bind(result.last_insert_rowid())
    .fetch_one(pool)
    .await
}

/// All users, most recent first.
pub async fn get_all_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
  sqlx::query_as(
    "SELECT id, name, email, role, created_at, updated_at FROM users ORDER BY created_at DESC, id DESC",
  )
  .fetch_all(pool)
  .await
}

pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
  sqlx::query_as(SELECT_USER).bind(id).fetch_optional(pool).await
}

/// Overwrite name, email and role, refreshing `updated_at`.
///
/// Returns `Ok(None)` when no row matched the id. A new email colliding with
/// a different existing row fails with a UNIQUE violation.
pub async fn update_user(
  pool: &SqlitePool,
  id: i64,
  name: &str,
  email: &str,
  role: &str,
) -> Result<Option<User>, sqlx::Error> {
  let result =
    sqlx::query("UPDATE users SET name = ?, email = ?, role = ?, updated_at = ? WHERE id = ?")
      .bind(name)
      .bind(email)
      .bind(role)
      .bind(Utc::now())
      .bind(id)
      .execute(pool)
      .await?;

  if result.rows_affected() == 0 {
    return Ok(None);
  }
  sqlx::query_as(SELECT_USER).bind(id).fetch_optional(pool).await
}

/// Delete a user; returns whether a row was actually removed.
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
  let result = sqlx::query("DELETE FROM users WHERE id = ?")
    .bind(id)
    .execute(pool)
    .await?;
  Ok(result.rows_affected() > 0)
}
