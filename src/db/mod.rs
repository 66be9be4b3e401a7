//! Database layer: schema management, seeding, path handling and repositories.

use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

pub mod logs;
pub mod stats;
pub mod users;

/// Create the `users` and `logs` tables if absent.
///
/// Idempotent; safe to call on every startup regardless of existing data.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
  sqlx::query(
    r#"CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            role TEXT NOT NULL DEFAULT 'user',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )"#,
  )
  .execute(pool)
  .await?;

  sqlx::query(
    r#"CREATE TABLE IF NOT EXISTS logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            level TEXT NOT NULL,
            message TEXT NOT NULL,
            endpoint TEXT NULL,
            user_agent TEXT NULL,
            ip_address TEXT NULL,
            created_at TEXT NOT NULL
        )"#,
  )
  .execute(pool)
  .await?;
  Ok(())
}

/// Insert the fixed initial users, but only when the table is empty.
///
/// Idempotent across restarts: any existing user suppresses the seed.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), sqlx::Error> {
  let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
    .fetch_one(pool)
    .await?;
  if count > 0 {
    return Ok(());
  }

  info!("seeding initial user data");
  let initial = [
    ("John Doe", "john@example.com", "admin"),
    ("Jane Smith", "jane@example.com", "user"),
    ("Bob Johnson", "bob@example.com", "user"),
  ];
  for (name, email, role) in initial {
    users::create_user(pool, name, email, role).await?;
  }
  Ok(())
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
  if !db_url.starts_with("sqlite:") {
    return db_url.to_string();
  }
  let path_part = db_url.trim_start_matches("sqlite://");
  if path_part == ":memory:" {
    return db_url.to_string();
  }
  let (path_only, _) = match path_part.split_once('?') {
    Some((p, q)) => (p, Some(q)),
    None => (path_part, None),
  };
  if !path_only.is_empty() {
    let p = Path::new(path_only);
    if let Some(parent) = p.parent() {
      if !parent.as_os_str().is_empty() {
        let _ = std::fs::create_dir_all(parent);
      }
    }
    let _ = std::fs::OpenOptions::new()
      .create(true)
      .append(true)
      .open(p);
  }
  db_url.to_string()
}

/// Whether a sqlx error is a UNIQUE constraint violation.
///
/// `create_user`/`update_user` rely entirely on the storage-level constraint
/// to reject duplicate emails, so callers classify after the fact instead of
/// checking before the insert.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
  match e {
    sqlx::Error::Database(db) => db.is_unique_violation(),
    _ => false,
  }
}
