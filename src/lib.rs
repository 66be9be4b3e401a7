//! userhub library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router, handlers, request logging middleware
//! - `db`: schema management, seeding and the SQLite repositories
//! - `models`: typed records used across layers
//! - `util`: tracing setup

pub mod app;
pub mod db;
pub mod http;
pub mod models;
pub mod util;
