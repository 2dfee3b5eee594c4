//! Integration tests for the CLI commands.

use doc_diff_studio::commands::{
    execute_compare, execute_convert, validate_args, validate_report_file, CompareArgs,
    ConvertArgs,
};
use doc_diff_studio::diff::Granularity;
use std::path::PathBuf;

fn write(dir: &std::path::Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_compare_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let original = write(dir.path(), "v1.html", "<p>The first draft</p>");
    let modified = write(dir.path(), "v2.html", "<p>The final draft</p>");
    let html = dir.path().join("out/diff.html");
    let json = dir.path().join("out/diff.json");

    let args = CompareArgs {
        original,
        modified,
        granularity: Some(Granularity::Blocks),
        output_html: Some(html.clone()),
        output_json: Some(json.clone()),
        ..Default::default()
    };
    validate_args(&args).unwrap();
    let report = execute_compare(args).unwrap();

    assert!(html.exists());
    assert!(json.exists());
    assert_eq!(report.granularity, Granularity::Blocks);
    assert!(report.html.starts_with("<p class=\"modified\">"));

    validate_report_file(&json).unwrap();
}

#[test]
fn test_compare_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let original = write(dir.path(), "a.txt", "Hello World");
    let modified = write(dir.path(), "b.txt", "hello world");
    let config = write(
        dir.path(),
        "doc-diff.toml",
        "[diff]\ngranularity = \"chars\"\nignore_case = true\n\n[render]\ntitle = \"Configured\"\n",
    );

    let args = CompareArgs {
        original,
        modified,
        config: Some(config),
        output_html: None,
        output_json: Some(dir.path().join("r.json")),
        ..Default::default()
    };
    let report = execute_compare(args).unwrap();

    assert_eq!(report.granularity, Granularity::Chars);
    assert_eq!(report.title, "Configured");
    assert!(!report.has_changes());
}

#[test]
fn test_compare_fail_on_changes() {
    let dir = tempfile::tempdir().unwrap();
    let original = write(dir.path(), "a.txt", "one");
    let modified = write(dir.path(), "b.txt", "two");

    let args = CompareArgs {
        original: original.clone(),
        modified,
        output_html: None,
        print_summary: true,
        fail_on_changes: true,
        ..Default::default()
    };
    assert!(execute_compare(args).is_err());

    let same = CompareArgs {
        original: original.clone(),
        modified: original,
        output_html: None,
        print_summary: true,
        fail_on_changes: true,
        ..Default::default()
    };
    assert!(execute_compare(same).is_ok());
}

#[test]
fn test_compare_fail_on_formatting_change() {
    let dir = tempfile::tempdir().unwrap();
    let original = write(dir.path(), "a.html", "<p>Hello world</p>");
    let modified = write(dir.path(), "b.html", "<p>Hello <strong>world</strong></p>");

    let args = CompareArgs {
        original,
        modified,
        granularity: Some(Granularity::Blocks),
        output_html: None,
        print_summary: true,
        fail_on_changes: true,
        ..Default::default()
    };
    let err = execute_compare(args).unwrap_err();
    assert!(err.to_string().contains("formatting only"));
}

#[test]
fn test_compare_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let original = write(dir.path(), "a.txt", "one");
    let config = write(dir.path(), "bad.toml", "[diff]\nmin_similarity = 2.0\n");

    let args = CompareArgs {
        original: original.clone(),
        modified: original,
        config: Some(config),
        output_html: None,
        print_summary: true,
        ..Default::default()
    };
    assert!(execute_compare(args).is_err());
}

#[test]
fn test_convert_writes_html_and_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "notes.txt", "Line one\nLine two\n\nNext");
    let html = dir.path().join("notes.html");
    let text = dir.path().join("notes.out.txt");

    let document = execute_convert(ConvertArgs {
        input,
        output_html: Some(html.clone()),
        output_text: Some(text.clone()),
    })
    .unwrap();

    assert_eq!(
        std::fs::read_to_string(&html).unwrap(),
        "<p>Line one<br />Line two</p><p>Next</p>"
    );
    assert_eq!(std::fs::read_to_string(&text).unwrap(), document.text);
}

#[test]
fn test_validate_report_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "bad.json", "[]");
    assert!(validate_report_file(&path).is_err());
}
