use crate::record::EntityKind;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::GLOBE, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

/// Heading for one entity kind's listing
pub fn section(kind: EntityKind) {
    println!();
    println!(
        "{} {}",
        Icons::for_kind(kind),
        kind.title().style(theme().header.clone())
    );
}

/// One rendered record line, indented under its section
pub fn record(line: &str) {
    println!("  {}", line);
}

pub fn muted(text: &str) -> String {
    text.style(theme().muted.clone()).to_string()
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value.style(theme().amount.clone()));
}
