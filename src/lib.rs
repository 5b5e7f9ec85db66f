//! # AtlasOG - Personal Dashboard
//!
//! Records three kinds of notes into a local SQLite file and renders them
//! back most-recent-first.
//!
//! AtlasOG provides:
//! - A thread-safe SQLite store with append-only inserts per entity kind
//! - Recency-ordered retrieval over a closed set of entity kinds
//! - Shared line rendering for the terminal and the web dashboard
//! - An axum-based dashboard server

pub mod record;
pub mod storage;
pub mod render;
pub mod server;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use record::{EntityKind, Idea, Investment, Project, ProjectStatus, Record};
pub use storage::Store;

/// Result type alias for AtlasOG operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for AtlasOG operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database connection lock poisoned")]
    LockPoisoned,

    #[error("Unknown entity kind: {0}")]
    UnknownKind(String),

    #[error("Unknown project status: {0}")]
    UnknownStatus(String),
}
