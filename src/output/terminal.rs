//! Terminal output rendering for diff reports.
//!
//! Provides a human-readable summary of a comparison with coloured
//! added/removed fragments.

use super::json::DiffReport;
use crate::diff::ChangeKind;
use colored::*;

const SEPARATOR: &str = "---------------------------------------------------\n";
const MAX_FRAGMENT_CHARS: usize = 80;

/// Render a human-readable summary of a diff report for the terminal
///
/// At most `max_changes` changed fragments are listed.
pub fn render_terminal_diff(report: &DiffReport, max_changes: usize) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_stats(report));
    out.push_str(&render_changes(report, max_changes));
    out.push_str(&render_warnings(report));
    out.push_str(&render_status(report));

    out
}

fn render_header(report: &DiffReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"Document Comparison Summary".bold().to_string());
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push_str(&format!("Original:    {}\n", report.original.source));
    out.push_str(&format!("Modified:    {}\n", report.modified.source));
    out.push_str(&format!("Granularity: {}\n", report.granularity));
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

fn render_stats(report: &DiffReport) -> String {
    let stats = &report.stats;
    format!(
        "Tokens:     {} {} ({} unchanged)\nCharacters: {} {}\nSimilarity: {:.1}%\n",
        format!("+{}", stats.added_tokens).green(),
        format!("-{}", stats.removed_tokens).red(),
        stats.unchanged_tokens,
        format!("+{}", stats.added_chars).green(),
        format!("-{}", stats.removed_chars).red(),
        stats.similarity * 100.0
    )
}

fn render_changes(report: &DiffReport, max_changes: usize) -> String {
    let changed: Vec<_> = report.changes.iter().filter(|c| c.is_change()).collect();
    if changed.is_empty() || max_changes == 0 {
        return String::new();
    }

    let mut out = String::from("\nChanges:\n");
    for change in changed.iter().take(max_changes) {
        let fragment = shorten(&change.value);
        let line = match change.kind {
            ChangeKind::Added => format!("  + {}", fragment).green(),
            ChangeKind::Removed => format!("  - {}", fragment).red(),
            ChangeKind::Unchanged => continue,
        };
        out.push_str(&line.to_string());
        out.push('\n');
    }

    if changed.len() > max_changes {
        out.push_str(&format!("  ... and {} more\n", changed.len() - max_changes));
    }
    out
}

fn render_warnings(report: &DiffReport) -> String {
    let warnings: Vec<&String> = report
        .original
        .warnings
        .iter()
        .chain(report.modified.warnings.iter())
        .collect();
    if warnings.is_empty() {
        return String::new();
    }

    let mut out = String::from("\nConversion warnings:\n");
    for warning in warnings {
        out.push_str(&format!("  {}\n", warning.yellow()));
    }
    out
}

fn render_status(report: &DiffReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(SEPARATOR);
    let status = if report.stats.has_changes() {
        format!("STATUS: CHANGED ({} change(s))", report.stats.change_count)
            .yellow()
            .bold()
    } else if report.has_changes() {
        "STATUS: CHANGED (formatting only)".yellow().bold()
    } else {
        "STATUS: IDENTICAL".green().bold()
    };
    out.push_str(&status.to_string());
    out.push('\n');
    out
}

/// Single-line, length-limited fragment
fn shorten(value: &str) -> String {
    let flat = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_FRAGMENT_CHARS {
        flat
    } else {
        let head: String = flat.chars().take(MAX_FRAGMENT_CHARS - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("a\n  b"), "a b");
        let long = "x".repeat(200);
        let short = shorten(&long);
        assert_eq!(short.chars().count(), MAX_FRAGMENT_CHARS);
        assert!(short.ends_with("..."));
    }
}
