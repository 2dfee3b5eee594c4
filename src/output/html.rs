//! Standalone HTML page output.
//!
//! Wraps the highlighted diff fragment in a page with a small header and a
//! stylesheet for the configured marker classes.

use crate::document::html::escape_html;
use crate::utils::config::CssClasses;
use crate::utils::error::OutputError;
use log::info;
use std::fs;
use std::path::Path;

use super::json::DiffReport;
use super::{file_size, prepare_output_path};

/// Render the full HTML page for a report
pub fn render_html_page(report: &DiffReport, classes: &CssClasses) -> String {
    let title = escape_html(&report.title);
    let stats = &report.stats;

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\" />\n");
    page.push_str(&format!("<title>{}</title>\n", title));
    page.push_str("<style>\n");
    page.push_str(&stylesheet(classes));
    page.push_str("</style>\n</head>\n<body>\n");

    page.push_str("<header class=\"diff-header\">\n");
    page.push_str(&format!("<h1>{}</h1>\n", title));
    page.push_str("<dl>\n");
    page.push_str(&format!(
        "<dt>Original</dt><dd>{}</dd>\n",
        escape_html(&report.original.source)
    ));
    page.push_str(&format!(
        "<dt>Modified</dt><dd>{}</dd>\n",
        escape_html(&report.modified.source)
    ));
    page.push_str(&format!("<dt>Granularity</dt><dd>{}</dd>\n", report.granularity));
    page.push_str(&format!(
        "<dt>Changes</dt><dd><span class=\"{}\">+{}</span> <span class=\"{}\">-{}</span> ({:.1}% similar)</dd>\n",
        classes.added,
        stats.added_tokens,
        classes.removed,
        stats.removed_tokens,
        stats.similarity * 100.0
    ));
    page.push_str(&format!(
        "<dt>Generated</dt><dd>{}</dd>\n",
        escape_html(&report.generated_at)
    ));
    page.push_str("</dl>\n</header>\n");

    page.push_str("<main class=\"diff-body\">\n");
    page.push_str(&report.html);
    page.push_str("\n</main>\n</body>\n</html>\n");

    page
}

fn stylesheet(classes: &CssClasses) -> String {
    format!(
        "body {{ font-family: Georgia, serif; max-width: 60rem; margin: 2rem auto; line-height: 1.5; }}\n\
         .diff-header {{ font-family: sans-serif; border-bottom: 1px solid #ccc; margin-bottom: 1.5rem; }}\n\
         .diff-header dl {{ display: grid; grid-template-columns: max-content auto; gap: 0.2rem 1rem; }}\n\
         .diff-header dt {{ font-weight: bold; }}\n\
         .diff-body table {{ border-collapse: collapse; }}\n\
         .diff-body td, .diff-body th {{ border: 1px solid #ccc; padding: 0.25rem 0.5rem; }}\n\
         .{added} {{ background: #d4f8d4; color: #0a5d0a; text-decoration: none; }}\n\
         .{removed} {{ background: #fbd5d5; color: #8b1111; text-decoration: line-through; }}\n\
         .{modified} {{ border-left: 4px solid #e0b000; padding-left: 0.5rem; }}\n",
        added = classes.added,
        removed = classes.removed,
        modified = classes.modified,
    )
}

/// Write a report as a standalone HTML page
///
/// **Public** - main entry point for HTML output
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_html_report(
    report: &DiffReport,
    classes: &CssClasses,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing HTML report to: {}", output_path.display());

    prepare_output_path(output_path)?;
    fs::write(output_path, render_html_page(report, classes))?;

    info!(
        "HTML report written successfully ({} bytes)",
        file_size(output_path)
    );

    Ok(())
}

/// Write converted HTML or text as-is
pub fn write_text(contents: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    prepare_output_path(output_path)?;
    fs::write(output_path, contents)?;

    info!("Wrote {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{compare_documents, BlockOptions, DiffOptions, Granularity};
    use crate::document::Document;
    use crate::output::json::build_report;

    #[test]
    fn test_page_contains_classes_and_body() {
        let original = Document::from_text("v1 <draft>.txt", "alpha beta");
        let modified = Document::from_text("v2.txt", "alpha gamma");
        let classes = CssClasses {
            added: "ins".to_string(),
            removed: "del".to_string(),
            modified: "mod".to_string(),
        };
        let comparison = compare_documents(
            &original,
            &modified,
            Granularity::Words,
            &DiffOptions::default(),
            &BlockOptions::default(),
            &classes,
        );
        let report = build_report(&original, &modified, comparison, "Review");
        let page = render_html_page(&report, &classes);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Review</title>"));
        assert!(page.contains(".ins {"));
        assert!(page.contains(".del {"));
        assert!(page.contains("v1 &lt;draft&gt;.txt"));
        assert!(page.contains(&report.html));
    }
}
