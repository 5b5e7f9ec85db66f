use crate::record::{EntityKind, Record};
use crate::render;
use crate::storage::DbStats;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Category")]
    pub label: String,
    #[tabled(rename = "Entries")]
    pub value: String,
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "#")]
    id: i64,
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Added")]
    added: String,
}

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        let entry = match record {
            Record::Investment(r) => format!("{}: {}", r.name, render::format_amount(r.amount)),
            Record::Project(r) => format!("{} - {}", r.name, r.status),
            Record::Idea(r) => r.content.clone(),
        };
        Self {
            id: record.id(),
            entry,
            added: render::short_timestamp(record.created_at()).to_string(),
        }
    }
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            label: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

/// Row counts per category
pub fn stats_table(stats: &DbStats) -> String {
    let mut builder = TableBuilder::new();
    for kind in EntityKind::all() {
        builder.add_row(kind.title(), &stats.get(*kind).to_string());
    }
    builder.build()
}

/// Records as a rounded table; empty input gives an empty string
pub fn records_table(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Investment;

    #[test]
    fn test_stats_table_lists_every_category() {
        let table = stats_table(&DbStats { investments: 2, projects: 0, ideas: 5 });
        assert!(table.contains("Wealth & Investments"));
        assert!(table.contains("Homestead & Lifestyle"));
        assert!(table.contains("Ideas & Research"));
        assert!(table.contains('5'));
    }

    #[test]
    fn test_records_table() {
        assert!(records_table(&[]).is_empty());

        let records = vec![Record::Investment(Investment {
            id: 7,
            name: "Gold ETF".to_string(),
            amount: 2500.0,
            created_at: "2025-03-14T09:26:53.589793".to_string(),
        })];
        let table = records_table(&records);
        assert!(table.contains("Gold ETF: $2,500.00"));
        assert!(table.contains("2025-03-14T09:26:53"));
        assert!(!table.contains(".589793"));
    }
}
