use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use userhub::db::{self, logs, stats, users};

async fn test_pool() -> SqlitePool {
  // One connection so the in-memory database is shared.
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite://:memory:")
    .await
    .expect("connect memory sqlite");
  db::ensure_schema(&pool).await.expect("schema");
  pool
}

#[tokio::test]
async fn schema_is_idempotent() {
  let pool = test_pool().await;
  db::ensure_schema(&pool).await.expect("second run");
  db::ensure_schema(&pool).await.expect("third run");
}

#[tokio::test]
async fn seed_runs_only_on_empty_table() {
  let pool = test_pool().await;

  db::seed_if_empty(&pool).await.expect("seed");
  let all = users::get_all_users(&pool).await.unwrap();
  assert_eq!(all.len(), 3);
  let admins: Vec<_> = all.iter().filter(|u| u.role == "admin").collect();
  assert_eq!(admins.len(), 1);
  assert_eq!(admins[0].email, "john@example.com");

  // Restart: any existing user suppresses the seed
  db::seed_if_empty(&pool).await.expect("seed again");
  assert_eq!(users::get_all_users(&pool).await.unwrap().len(), 3);
}

#[tokio::test]
async fn create_then_fetch_roundtrip() {
  let pool = test_pool().await;

  let created = users::create_user(&pool, "Ann", "ann@x.com", "admin")
    .await
    .unwrap();
  assert!(created.id > 0);
  assert_eq!(created.name, "Ann");
  assert_eq!(created.email, "ann@x.com");
  assert_eq!(created.role, "admin");

  let fetched = users::get_user_by_id(&pool, created.id)
    .await
    .unwrap()
    .expect("user exists");
  assert_eq!(fetched.name, created.name);
  assert_eq!(fetched.email, created.email);
  assert_eq!(fetched.role, created.role);
  assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn duplicate_email_fails_without_inserting() {
  let pool = test_pool().await;

  users::create_user(&pool, "First", "dup@x.com", "user")
    .await
    .unwrap();
  let err = users::create_user(&pool, "Second", "dup@x.com", "admin")
    .await
    .expect_err("unique constraint");
  assert!(db::is_unique_violation(&err));
  assert_eq!(users::get_all_users(&pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_refreshes_fields_and_timestamp() {
  let pool = test_pool().await;

  let created = users::create_user(&pool, "Original", "orig@x.com", "user")
    .await
    .unwrap();
  let updated = users::update_user(&pool, created.id, "Updated", "updated@x.com", "admin")
    .await
    .unwrap()
    .expect("row matched");
  assert_eq!(updated.name, "Updated");
  assert_eq!(updated.email, "updated@x.com");
  assert_eq!(updated.role, "admin");
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_missing_id_returns_none() {
  let pool = test_pool().await;

  let result = users::update_user(&pool, 42, "Ghost", "ghost@x.com", "user")
    .await
    .unwrap();
  assert!(result.is_none());
  assert!(users::get_all_users(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_to_colliding_email_fails() {
  let pool = test_pool().await;

  users::create_user(&pool, "A", "a@x.com", "user").await.unwrap();
  let b = users::create_user(&pool, "B", "b@x.com", "user").await.unwrap();
  let err = users::update_user(&pool, b.id, "B", "a@x.com", "user")
    .await
    .expect_err("unique constraint");
  assert!(db::is_unique_violation(&err));
}

#[tokio::test]
async fn delete_reports_whether_row_existed() {
  let pool = test_pool().await;

  assert!(!users::delete_user(&pool, 7).await.unwrap());

  let created = users::create_user(&pool, "Gone", "gone@x.com", "user")
    .await
    .unwrap();
  assert!(users::delete_user(&pool, created.id).await.unwrap());
  assert!(!users::delete_user(&pool, created.id).await.unwrap());
  assert!(
    users::get_user_by_id(&pool, created.id)
      .await
      .unwrap()
      .is_none()
  );
}

#[tokio::test]
async fn users_ordered_most_recent_first() {
  let pool = test_pool().await;

  for n in ["u1", "u2", "u3"] {
    users::create_user(&pool, n, &format!("{n}@x.com"), "user")
      .await
      .unwrap();
  }
  let names: Vec<String> = users::get_all_users(&pool)
    .await
    .unwrap()
    .into_iter()
    .map(|u| u.name)
    .collect();
  assert_eq!(names, vec!["u3", "u2", "u1"]);
}

#[tokio::test]
async fn log_activity_appends_and_limits() {
  let pool = test_pool().await;

  let mut last_id = 0;
  for n in 1..=5 {
    let id = logs::log_activity(
      &pool,
      "INFO",
      &format!("m{n}"),
      Some("/test"),
      Some("Test Agent"),
      Some("127.0.0.1"),
    )
    .await
    .unwrap();
    assert!(id > last_id);
    last_id = id;
  }

  let recent = logs::get_logs(&pool, 3).await.unwrap();
  let messages: Vec<&str> = recent.iter().map(|l| l.message.as_str()).collect();
  assert_eq!(messages, vec!["m5", "m4", "m3"]);
  assert_eq!(recent[0].endpoint.as_deref(), Some("/test"));
  assert_eq!(recent[0].user_agent.as_deref(), Some("Test Agent"));
  assert_eq!(recent[0].ip_address.as_deref(), Some("127.0.0.1"));
}

#[tokio::test]
async fn optional_log_fields_stay_null() {
  let pool = test_pool().await;

  logs::log_activity(&pool, "WARN", "bare entry", None, None, None)
    .await
    .unwrap();
  let entry = &logs::get_logs(&pool, 1).await.unwrap()[0];
  assert_eq!(entry.level, "WARN");
  assert!(entry.endpoint.is_none());
  assert!(entry.user_agent.is_none());
  assert!(entry.ip_address.is_none());
}

#[tokio::test]
async fn stats_count_users_and_recent_logs() {
  let pool = test_pool().await;

  users::create_user(&pool, "Boss", "boss@x.com", "admin")
    .await
    .unwrap();
  users::create_user(&pool, "Worker", "worker@x.com", "user")
    .await
    .unwrap();
  logs::log_activity(&pool, "INFO", "one", None, None, None)
    .await
    .unwrap();
  logs::log_activity(&pool, "INFO", "two", None, None, None)
    .await
    .unwrap();

  let s = stats::get_stats(&pool).await.unwrap();
  assert_eq!(s.total_users, 2);
  assert_eq!(s.admin_users, 1);
  assert_eq!(s.total_logs, 2);
  // Fresh entries are inside the trailing one-hour window
  assert_eq!(s.recent_logs, 2);
}
