//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - investments(id, name, amount, date)
//! - projects(id, name, status, date)
//! - ideas(id, content, date)

pub mod schema;
pub mod sqlite;

pub use sqlite::{DbStats, Store, timestamp_now};
