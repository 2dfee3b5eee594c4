use crate::output::read_report;
use crate::utils::config::REPORT_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a JSON diff report and print a summary
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Invalid report {}", file_path.display()))?;

    if report.report_version != REPORT_VERSION {
        log::warn!(
            "Report version {} differs from current version {}",
            report.report_version,
            REPORT_VERSION
        );
    }

    println!("✓ Valid diff report JSON");
    println!("  Version:     {}", report.report_version);
    println!("  Generated:   {}", report.generated_at);
    println!("  Original:    {}", report.original.source);
    println!("  Modified:    {}", report.modified.source);
    println!("  Granularity: {}", report.granularity);
    println!("  Changes:     {}", report.stats.summary());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Doc Diff Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_VERSION);
    println!();
    println!("Compares DOCX, HTML and text documents and renders highlighted diffs.");
}
