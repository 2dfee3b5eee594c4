//! Integration tests for report writers.

use doc_diff_studio::diff::{compare_documents, BlockOptions, DiffOptions, Granularity};
use doc_diff_studio::document::{Document, DocumentFormat};
use doc_diff_studio::output::{
    build_report, read_report, render_terminal_diff, write_html_report, write_report, write_text,
    DiffReport,
};
use doc_diff_studio::utils::config::CssClasses;
use doc_diff_studio::utils::error::OutputError;

fn report(original: &str, modified: &str) -> DiffReport {
    let a = Document::from_text("old.txt", original);
    let b = Document::from_text("new.txt", modified);
    let comparison = compare_documents(
        &a,
        &b,
        Granularity::Words,
        &DiffOptions::default(),
        &BlockOptions::default(),
        &CssClasses::default(),
    );
    build_report(&a, &b, comparison, "Review")
}

#[test]
fn test_json_report_roundtrip_with_metadata() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("nested/dirs/report.json");
    let report = report("alpha beta\n\ngamma", "alpha delta\n\ngamma");

    write_report(&report, &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded.original.format, DocumentFormat::Text);
    assert_eq!(loaded.original.paragraphs, 2);
    assert_eq!(loaded.modified.characters, "alpha delta\n\ngamma".chars().count());
    assert_eq!(loaded.stats, report.stats);
    assert_eq!(loaded.title, "Review");
}

#[test]
fn test_json_report_field_names() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("report.json");
    write_report(&report("a", "b"), &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    for field in [
        "report_version",
        "generated_at",
        "granularity",
        "original",
        "modified",
        "stats",
        "changes",
        "blocks",
        "html",
    ] {
        assert!(value.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(value["granularity"], "words");
    assert_eq!(value["changes"][0]["kind"], "removed");
}

#[test]
fn test_write_html_report_to_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = write_html_report(&report("a", "b"), &CssClasses::default(), temp_dir.path());
    assert!(matches!(result, Err(OutputError::InvalidPath(_))));
}

#[test]
fn test_write_html_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("out/diff.html");
    let report = report("one two", "one three");

    write_html_report(&report, &CssClasses::default(), &path).unwrap();
    let page = std::fs::read_to_string(&path).unwrap();

    assert!(page.contains(".added {"));
    assert!(page.contains("<span class=\"removed\">two</span>"));
    assert!(page.contains("old.txt"));
}

#[test]
fn test_write_text() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("converted.txt");
    write_text("plain\n", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "plain\n");
}

#[test]
fn test_terminal_summary_status() {
    colored::control::set_override(false);

    let changed = render_terminal_diff(&report("a b c", "a x c"), 10);
    assert!(changed.contains("STATUS: CHANGED"));
    assert!(changed.contains("  - b"));
    assert!(changed.contains("  + x"));

    let identical = render_terminal_diff(&report("same", "same"), 10);
    assert!(identical.contains("STATUS: IDENTICAL"));
    assert!(!identical.contains("Changes:"));
}

#[test]
fn test_terminal_summary_limits_changes() {
    colored::control::set_override(false);

    let summary = render_terminal_diff(&report("a b", "a c"), 1);
    assert!(summary.contains("... and 1 more"));
}

#[test]
fn test_terminal_summary_formatting_only() {
    colored::control::set_override(false);

    let a = Document::from_html("old.html", "<p>Hello world</p>");
    let b = Document::from_html("new.html", "<p>Hello <strong>world</strong></p>");
    let comparison = compare_documents(
        &a,
        &b,
        Granularity::Blocks,
        &DiffOptions::default(),
        &BlockOptions::default(),
        &CssClasses::default(),
    );
    let report = build_report(&a, &b, comparison, "Review");
    assert!(report.has_changes());

    let summary = render_terminal_diff(&report, 10);
    assert!(summary.contains("STATUS: CHANGED (formatting only)"));
}
