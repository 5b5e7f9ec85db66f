//! Database schema definitions
//!
//! Column layout matches existing `atlasog.db` files exactly; do not add
//! constraints or columns here without a migration story.

/// SQL to create the investments table
pub const CREATE_INVESTMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS investments (
    id INTEGER PRIMARY KEY,
    name TEXT,
    amount REAL,
    date TEXT
)
"#;

/// SQL to create the projects table
pub const CREATE_PROJECTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY,
    name TEXT,
    status TEXT,
    date TEXT
)
"#;

/// SQL to create the ideas table
pub const CREATE_IDEAS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS ideas (
    id INTEGER PRIMARY KEY,
    content TEXT,
    date TEXT
)
"#;

pub const INSERT_INVESTMENT: &str = "INSERT INTO investments (name, amount, date) VALUES (?1, ?2, ?3)";
pub const INSERT_PROJECT: &str = "INSERT INTO projects (name, status, date) VALUES (?1, ?2, ?3)";
pub const INSERT_IDEA: &str = "INSERT INTO ideas (content, date) VALUES (?1, ?2)";

// Ties on `date` fall back to insertion order, newest first.
pub const SELECT_INVESTMENTS: &str =
    "SELECT id, name, amount, date FROM investments ORDER BY date DESC, id DESC";
pub const SELECT_PROJECTS: &str =
    "SELECT id, name, status, date FROM projects ORDER BY date DESC, id DESC";
pub const SELECT_IDEAS: &str = "SELECT id, content, date FROM ideas ORDER BY date DESC, id DESC";

pub const COUNT_INVESTMENTS: &str = "SELECT COUNT(*) FROM investments";
pub const COUNT_PROJECTS: &str = "SELECT COUNT(*) FROM projects";
pub const COUNT_IDEAS: &str = "SELECT COUNT(*) FROM ideas";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![
        CREATE_INVESTMENTS_TABLE,
        CREATE_PROJECTS_TABLE,
        CREATE_IDEAS_TABLE,
    ]
}
