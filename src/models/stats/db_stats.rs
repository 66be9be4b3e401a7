//! Aggregated database counts for the admin stats endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStats {
  pub total_users: i64,
  pub admin_users: i64,
  pub total_logs: i64,
  pub recent_logs: i64,
}
