//! Line rendering shared by the terminal and web shells

use crate::record::{Idea, Investment, Project, Record};

/// Length of the `YYYY-MM-DDTHH:MM:SS` prefix shown next to each row
const SHORT_TIMESTAMP_LEN: usize = 19;

/// Trim a stored timestamp to whole seconds
pub fn short_timestamp(created_at: &str) -> &str {
    match created_at.char_indices().nth(SHORT_TIMESTAMP_LEN) {
        Some((idx, _)) => &created_at[..idx],
        None => created_at,
    }
}

/// Format an amount as dollars with thousands separators: `$1,234.50`
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" would read as a debt
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("${}{}.{}", sign, grouped, cents)
}

pub fn investment_line(inv: &Investment) -> String {
    format!(
        "{}: {} ({})",
        inv.name,
        format_amount(inv.amount),
        short_timestamp(&inv.created_at)
    )
}

pub fn project_line(proj: &Project) -> String {
    format!(
        "{} - {} ({})",
        proj.name,
        proj.status,
        short_timestamp(&proj.created_at)
    )
}

pub fn idea_line(idea: &Idea) -> String {
    format!("- {} ({})", idea.content, short_timestamp(&idea.created_at))
}

/// One display line for any record
pub fn record_line(record: &Record) -> String {
    match record {
        Record::Investment(r) => investment_line(r),
        Record::Project(r) => project_line(r),
        Record::Idea(r) => idea_line(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2025-03-14T09:26:53.589793";

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2500.0), "$2,500.00");
        assert_eq!(format_amount(1234567.891), "$1,234,567.89");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(999.999), "$1,000.00");
        assert_eq!(format_amount(-1234.5), "$-1,234.50");
        assert_eq!(format_amount(-0.001), "$0.00");
    }

    #[test]
    fn test_short_timestamp() {
        assert_eq!(short_timestamp(TS), "2025-03-14T09:26:53");
        assert_eq!(short_timestamp("2025-03-14"), "2025-03-14");
        assert_eq!(short_timestamp(""), "");
    }

    #[test]
    fn test_record_lines() {
        let inv = Record::Investment(Investment {
            id: 1,
            name: "Gold ETF".to_string(),
            amount: 2500.0,
            created_at: TS.to_string(),
        });
        assert_eq!(record_line(&inv), "Gold ETF: $2,500.00 (2025-03-14T09:26:53)");

        let proj = Record::Project(Project {
            id: 2,
            name: "Build barn".to_string(),
            status: "In Progress".to_string(),
            created_at: TS.to_string(),
        });
        assert_eq!(record_line(&proj), "Build barn - In Progress (2025-03-14T09:26:53)");

        let idea = Record::Idea(Idea {
            id: 3,
            content: String::new(),
            created_at: TS.to_string(),
        });
        assert_eq!(record_line(&idea), "-  (2025-03-14T09:26:53)");
    }
}
