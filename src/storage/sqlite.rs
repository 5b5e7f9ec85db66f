//! SQLite storage implementation

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use rusqlite::{Connection, params};
use serde::Serialize;
use crate::{Result, Error};
use crate::record::{EntityKind, Idea, Investment, Project, Record};
use super::schema;

/// Timestamp layout for the `date` column. Fixed width, so text order
/// is chronological order.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time in the `date` column layout
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// SQLite-backed storage for dashboard records.
///
/// One connection per store, guarded by a mutex so a single `Arc<Store>`
/// can be shared by every session. Each operation is one autocommitted
/// statement.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn: Mutex::new(conn) };
        store.initialize_schema()?;
        tracing::debug!("Opened store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn: Mutex::new(conn) };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema. Safe to run on every startup.
    pub fn initialize_schema(&self) -> Result<()> {
        let conn = self.lock()?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| Error::LockPoisoned)
    }

    // ========== Write Operations ==========

    /// Append an investment. Returns the assigned row id.
    pub fn add_investment(&self, name: &str, amount: f64) -> Result<i64> {
        let conn = self.lock()?;
        conn.execute(schema::INSERT_INVESTMENT, params![name, amount, timestamp_now()])?;
        let id = conn.last_insert_rowid();
        tracing::debug!("Inserted investment {} ({})", id, name);
        Ok(id)
    }

    /// Append a project. `status` is stored verbatim.
    pub fn add_project(&self, name: &str, status: &str) -> Result<i64> {
        let conn = self.lock()?;
        conn.execute(schema::INSERT_PROJECT, params![name, status, timestamp_now()])?;
        let id = conn.last_insert_rowid();
        tracing::debug!("Inserted project {} ({}, {})", id, name, status);
        Ok(id)
    }

    /// Append an idea. Empty content is allowed.
    pub fn add_idea(&self, content: &str) -> Result<i64> {
        let conn = self.lock()?;
        conn.execute(schema::INSERT_IDEA, params![content, timestamp_now()])?;
        let id = conn.last_insert_rowid();
        tracing::debug!("Inserted idea {}", id);
        Ok(id)
    }

    // ========== Read Operations ==========

    /// Every row of the given kind, most recent first
    pub fn fetch_all(&self, kind: EntityKind) -> Result<Vec<Record>> {
        let records: Vec<Record> = match kind {
            EntityKind::Investment => self.investments()?.into_iter().map(Record::from).collect(),
            EntityKind::Project => self.projects()?.into_iter().map(Record::from).collect(),
            EntityKind::Idea => self.ideas()?.into_iter().map(Record::from).collect(),
        };
        Ok(records)
    }

    /// All investments, most recent first
    pub fn investments(&self) -> Result<Vec<Investment>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(schema::SELECT_INVESTMENTS)?;
        let rows = stmt
            .query_map([], Self::row_to_investment)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// All projects, most recent first
    pub fn projects(&self) -> Result<Vec<Project>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(schema::SELECT_PROJECTS)?;
        let rows = stmt
            .query_map([], Self::row_to_project)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// All ideas, most recent first
    pub fn ideas(&self) -> Result<Vec<Idea>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(schema::SELECT_IDEAS)?;
        let rows = stmt
            .query_map([], Self::row_to_idea)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Count rows of one kind
    pub fn count(&self, kind: EntityKind) -> Result<usize> {
        let sql = match kind {
            EntityKind::Investment => schema::COUNT_INVESTMENTS,
            EntityKind::Project => schema::COUNT_PROJECTS,
            EntityKind::Idea => schema::COUNT_IDEAS,
        };
        let count: i64 = self.lock()?.query_row(sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            investments: self.count(EntityKind::Investment)?,
            projects: self.count(EntityKind::Project)?,
            ideas: self.count(EntityKind::Idea)?,
        })
    }

    // Columns written by other tools may hold NULL; read them as empty.

    fn row_to_investment(row: &rusqlite::Row) -> rusqlite::Result<Investment> {
        Ok(Investment {
            id: row.get(0)?,
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            amount: row.get::<_, Option<f64>>(2)?.unwrap_or_default(),
            created_at: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        })
    }

    fn row_to_project(row: &rusqlite::Row) -> rusqlite::Result<Project> {
        Ok(Project {
            id: row.get(0)?,
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            status: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            created_at: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        })
    }

    fn row_to_idea(row: &rusqlite::Row) -> rusqlite::Result<Idea> {
        Ok(Idea {
            id: row.get(0)?,
            content: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            created_at: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DbStats {
    pub investments: usize,
    pub projects: usize,
    pub ideas: usize,
}

impl DbStats {
    pub fn get(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Investment => self.investments,
            EntityKind::Project => self.projects,
            EntityKind::Idea => self.ideas,
        }
    }
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Investments: {}", self.investments)?;
        writeln!(f, "  Projects: {}", self.projects)?;
        writeln!(f, "  Ideas: {}", self.ideas)
    }
}
