//! Typed records shared between the database layer and the HTTP API.

pub mod log;
pub mod stats;
pub mod user;
