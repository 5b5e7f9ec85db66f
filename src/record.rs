//! Record types - the three note kinds kept by the dashboard
//!
//! Every kind is a flat row with no cross-references:
//! - `Investment`: name and amount
//! - `Project`: name and status
//! - `Idea`: free-text content
//!
//! `created_at` is always assigned by the store, never by callers.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of entity kinds.
///
/// Each kind maps to exactly one fixed table, so no query is ever
/// built from caller-supplied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Wealth & investments
    Investment,
    /// Homestead & lifestyle projects
    Project,
    /// Ideas & research
    Idea,
}

impl EntityKind {
    /// Get the string representation of the entity kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Investment => "investment",
            EntityKind::Project => "project",
            EntityKind::Idea => "idea",
        }
    }

    /// Backing table name
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Investment => "investments",
            EntityKind::Project => "projects",
            EntityKind::Idea => "ideas",
        }
    }

    /// Human-facing section title
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Investment => "Wealth & Investments",
            EntityKind::Project => "Homestead & Lifestyle",
            EntityKind::Idea => "Ideas & Research",
        }
    }

    /// Get all entity kinds, in sidebar order
    pub fn all() -> &'static [EntityKind] {
        &[EntityKind::Investment, EntityKind::Project, EntityKind::Idea]
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "investment" | "investments" | "wealth" | "invest" => Ok(EntityKind::Investment),
            "project" | "projects" | "homestead" => Ok(EntityKind::Project),
            "idea" | "ideas" | "research" => Ok(EntityKind::Idea),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Conventional project states offered by the shells.
///
/// The store keeps whatever text it is given; this enum only
/// drives the choices a shell presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn all() -> &'static [ProjectStatus] {
        &[
            ProjectStatus::NotStarted,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
        ]
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "not started" | "todo" => Ok(ProjectStatus::NotStarted),
            "in progress" | "doing" => Ok(ProjectStatus::InProgress),
            "completed" | "done" => Ok(ProjectStatus::Completed),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    pub name: String,
    /// Not validated; zero and negative values are kept as-is
    pub amount: f64,
    /// ISO-8601 local timestamp assigned at insertion
    pub created_at: String,
}

/// A homestead project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Stored verbatim, see [`ProjectStatus`] for the conventional values
    pub status: String,
    pub created_at: String,
}

/// A saved idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: i64,
    pub content: String,
    pub created_at: String,
}

/// Any row returned by [`crate::Store::fetch_all`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Investment(Investment),
    Project(Project),
    Idea(Idea),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Investment(_) => EntityKind::Investment,
            Record::Project(_) => EntityKind::Project,
            Record::Idea(_) => EntityKind::Idea,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Record::Investment(r) => r.id,
            Record::Project(r) => r.id,
            Record::Idea(r) => r.id,
        }
    }

    pub fn created_at(&self) -> &str {
        match self {
            Record::Investment(r) => &r.created_at,
            Record::Project(r) => &r.created_at,
            Record::Idea(r) => &r.created_at,
        }
    }
}

impl From<Investment> for Record {
    fn from(r: Investment) -> Self {
        Record::Investment(r)
    }
}

impl From<Project> for Record {
    fn from(r: Project) -> Self {
        Record::Project(r)
    }
}

impl From<Idea> for Record {
    fn from(r: Idea) -> Self {
        Record::Idea(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_aliases() {
        assert_eq!("investments".parse::<EntityKind>().unwrap(), EntityKind::Investment);
        assert_eq!("Wealth".parse::<EntityKind>().unwrap(), EntityKind::Investment);
        assert_eq!("homestead".parse::<EntityKind>().unwrap(), EntityKind::Project);
        assert_eq!(" idea ".parse::<EntityKind>().unwrap(), EntityKind::Idea);
        assert!(matches!(
            "investments; DROP TABLE ideas".parse::<EntityKind>(),
            Err(Error::UnknownKind(_))
        ));
    }

    #[test]
    fn test_table_names_are_fixed() {
        let tables: Vec<_> = EntityKind::all().iter().map(|k| k.table_name()).collect();
        assert_eq!(tables, vec!["investments", "projects", "ideas"]);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("in-progress".parse::<ProjectStatus>().unwrap(), ProjectStatus::InProgress);
        assert_eq!("Not Started".parse::<ProjectStatus>().unwrap(), ProjectStatus::NotStarted);
        assert_eq!("done".parse::<ProjectStatus>().unwrap(), ProjectStatus::Completed);
        assert!("someday".parse::<ProjectStatus>().is_err());
        assert_eq!(ProjectStatus::default().to_string(), "Not Started");
    }

    #[test]
    fn test_record_serializes_with_kind_tag() {
        let record = Record::from(Idea {
            id: 3,
            content: "solar dryer".to_string(),
            created_at: "2025-01-02T03:04:05.000000".to_string(),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["kind"], "idea");
        assert_eq!(value["content"], "solar dryer");
        assert_eq!(record.kind(), EntityKind::Idea);
        assert_eq!(record.id(), 3);
    }
}
