//! Activity log entry stored in SQLite and exposed via API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow)]
pub struct LogEntry {
  pub id: i64,
  pub level: String,
  pub message: String,
  pub endpoint: Option<String>,
  pub user_agent: Option<String>,
  pub ip_address: Option<String>,
  pub created_at: DateTime<Utc>,
}
