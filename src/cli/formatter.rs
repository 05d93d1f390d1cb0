//! Terminal output for the synopsis commands
use colored::*;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color as TableColor, ContentArrangement, Table};
use indicatif::ProgressStyle;

use crate::text::WordTable;

const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Disables colours when `NO_COLOR` is set or `CLICOLOR=0`.
pub fn init() {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let clicolor_off = std::env::var("CLICOLOR").map(|v| v == "0").unwrap_or(false);
    if no_color || clicolor_off {
        colored::control::set_override(false);
    }
}

pub fn print_error(message: &str) {
    eprintln!("\n{} {}", "✗".red(), format!("Error: {}", message).red());
}

pub fn print_warning(message: &str) {
    println!("\n{} {}", "⚠".yellow(), format!("Warning: {}", message).yellow());
}

pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green().bold(), message);
}

pub fn print_tip(message: &str) {
    println!("\n{} {}", "→".cyan(), format!("Tip: {}", message).dimmed());
}

/// Section header underlined to the terminal width, at most 60 columns.
pub fn print_section(title: &str) {
    let width = terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .unwrap_or(60)
        .min(60);
    println!("\n{} {}", "▶".cyan(), title.bold());
    println!("{}", "─".repeat(width).dimmed());
}

/// Bar style for the per-document alignment progress.
pub fn create_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░")
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Two-column label/value summary under a bold title.
pub fn print_stats_table(title: &str, stats: Vec<(&str, String)>) {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new(title).add_attribute(Attribute::Bold).fg(TableColor::Cyan),
        Cell::new(""),
    ]);
    for (label, value) in stats {
        table.add_row(vec![Cell::new(label), Cell::new(value).fg(TableColor::Green)]);
    }
    println!("\n{}", table);
}

/// Renders the first `max_columns` word columns; a trailing `…` cell marks
/// truncation.
pub fn print_word_table(words: &WordTable, max_columns: usize) {
    let mut table = styled_table();
    let truncated = words.column_count() > max_columns;
    for row in &words.rows {
        let mut cells = vec![Cell::new(&row.id).add_attribute(Attribute::Bold)];
        cells.extend(row.words.iter().take(max_columns).map(Cell::new));
        if truncated {
            cells.push(Cell::new("…"));
        }
        table.add_row(cells);
    }
    println!("\n{}", table);
}

/// `1234567` -> `"1,234,567"`
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(12345), "12,345");
        assert_eq!(format_number(123456), "123,456");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_progress_style_builds() {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_style(create_progress_style());
        pb.set_length(3);
        pb.inc(1);
        assert_eq!(pb.position(), 1);
    }
}
