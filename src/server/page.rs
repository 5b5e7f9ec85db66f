//! HTML rendering for the dashboard page

use crate::record::{EntityKind, ProjectStatus, Record};
use crate::render;
use crate::storage::DbStats;
use crate::ui::Icons;
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; display: flex; min-height: 100vh; }
nav { width: 16rem; background: #f0f2f6; padding: 1.5rem; }
nav a { display: block; padding: .4rem 0; color: #262730; text-decoration: none; }
nav a.active { font-weight: bold; color: #ff4b4b; }
main { flex: 1; padding: 2rem 3rem; }
form { display: flex; flex-direction: column; gap: .6rem; max-width: 28rem; }
.notice { background: #dff5e3; padding: .6rem 1rem; border-radius: .4rem; }
.muted { color: #808495; }
"#;

/// Escape text for HTML element and attribute contexts
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn form_html(kind: EntityKind) -> String {
    match kind {
        EntityKind::Investment => r#"<form method="post" action="/investments">
<label>Investment Name <input name="name"></label>
<label>Amount <input name="amount" type="number" min="0" step="0.01" value="0.00"></label>
<button type="submit">Add Investment</button>
</form>"#
            .to_string(),
        EntityKind::Project => {
            let options: String = ProjectStatus::all()
                .iter()
                .map(|s| format!("<option>{}</option>", escape_html(s.as_str())))
                .collect();
            format!(
                r#"<form method="post" action="/projects">
<label>Project Name <input name="name"></label>
<label>Status <select name="status">{}</select></label>
<button type="submit">Add Project</button>
</form>"#,
                options
            )
        }
        EntityKind::Idea => r#"<form method="post" action="/ideas">
<label>New Idea <textarea name="content" rows="4"></textarea></label>
<button type="submit">Save Idea</button>
</form>"#
            .to_string(),
    }
}

fn list_heading(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Investment => "Your Investments",
        EntityKind::Project => "Your Projects",
        EntityKind::Idea => "Saved Ideas",
    }
}

fn added_notice(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Investment => "Investment added!",
        EntityKind::Project => "Project added!",
        EntityKind::Idea => "Idea saved!",
    }
}

/// Full dashboard page for one selected category
pub fn dashboard(kind: EntityKind, records: &[Record], stats: &DbStats, added: bool) -> String {
    let mut html = String::new();
    // Writing into a String never fails.
    let _ = write!(
        html,
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>AtlasOG</title><style>{}</style></head><body>\n",
        STYLE
    );

    html.push_str("<nav><h3>Navigate</h3>\n");
    for k in EntityKind::all() {
        let class = if *k == kind { " class=\"active\"" } else { "" };
        let _ = writeln!(
            html,
            "<a href=\"/?tab={}\"{}>{} <span class=\"muted\">({})</span></a>",
            k.table_name(),
            class,
            k.title(),
            stats.get(*k)
        );
    }
    html.push_str("</nav>\n<main>\n<h1>🌍 AtlasOG Dashboard</h1>\n");
    html.push_str("<p>Your live Atlas Operating System (AOG).</p>\n");

    let _ = writeln!(html, "<h2>{} {}</h2>", Icons::for_kind(kind), kind.title());
    if added {
        let _ = writeln!(html, "<p class=\"notice\">{}</p>", added_notice(kind));
    }
    html.push_str(&form_html(kind));

    let _ = writeln!(html, "\n<h3>{}</h3>", list_heading(kind));
    if records.is_empty() {
        html.push_str("<p class=\"muted\">Nothing recorded yet.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for record in records {
            let _ = writeln!(html, "<li>{}</li>", escape_html(&render::record_line(record)));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</main></body></html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Idea, Project};

    fn stats() -> DbStats {
        DbStats { investments: 0, projects: 1, ideas: 2 }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_idea_content_is_escaped() {
        let records = vec![Record::Idea(Idea {
            id: 1,
            content: "<script>steal()</script>".to_string(),
            created_at: "2025-01-01T10:00:00.000000".to_string(),
        })];
        let html = dashboard(EntityKind::Idea, &records, &stats(), false);
        assert!(!html.contains("<script>steal"));
        assert!(html.contains("&lt;script&gt;steal()&lt;/script&gt;"));
        assert!(html.contains("Saved Ideas"));
    }

    #[test]
    fn test_project_page_offers_statuses() {
        let records = vec![Record::Project(Project {
            id: 1,
            name: "Build barn".to_string(),
            status: "In Progress".to_string(),
            created_at: "2025-01-01T10:00:00.000000".to_string(),
        })];
        let html = dashboard(EntityKind::Project, &records, &stats(), true);
        for status in ProjectStatus::all() {
            assert!(html.contains(&format!("<option>{}</option>", status)));
        }
        assert!(html.contains("Build barn - In Progress (2025-01-01T10:00:00)"));
        assert!(html.contains("Project added!"));
        assert!(html.contains("href=\"/?tab=projects\" class=\"active\""));
    }

    #[test]
    fn test_empty_state() {
        let html = dashboard(EntityKind::Investment, &[], &stats(), false);
        assert!(html.contains("Nothing recorded yet."));
        assert!(html.contains("action=\"/investments\""));
        assert!(!html.contains("class=\"notice\""));
    }
}
