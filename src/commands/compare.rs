//! Compare command implementation.
//!
//! The compare command:
//! 1. Loads the comparison config (if any)
//! 2. Loads and converts both documents
//! 3. Diffs them at the requested granularity
//! 4. Writes the HTML page and/or JSON report
//! 5. Prints the terminal summary (if requested)

use super::models::CompareArgs;
use crate::diff::{compare_documents, BlockOptions, DiffOptions, Granularity};
use crate::document::{load_document, DocumentFormat};
use crate::output::{build_report, render_terminal_diff, write_html_report, write_report, DiffReport};
use crate::utils::config::{
    load_config, CompareConfig, CssClasses, DEFAULT_MIN_SIMILARITY, DEFAULT_REPORT_TITLE,
    DEFAULT_TERMINAL_CHANGES,
};
use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};
use std::time::Instant;

/// Settings after merging CLI flags, config file and defaults
#[derive(Debug, Clone)]
struct CompareSettings {
    granularity: Granularity,
    options: DiffOptions,
    block_options: BlockOptions,
    classes: CssClasses,
    title: String,
    terminal_changes: usize,
}

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Compare command arguments
///
/// # Returns
/// The generated report, or Err with context if any step fails.
/// With `fail_on_changes`, differing documents are an error.
///
/// # Example
/// ```ignore
/// let args = CompareArgs {
///     original: PathBuf::from("v1.docx"),
///     modified: PathBuf::from("v2.docx"),
///     granularity: Some(Granularity::Blocks),
///     ..Default::default()
/// };
/// execute_compare(args)?;
/// ```
pub fn execute_compare(args: CompareArgs) -> Result<DiffReport> {
    let start_time = Instant::now();

    info!(
        "Comparing {} -> {}",
        args.original.display(),
        args.modified.display()
    );

    // Step 1: Resolve settings
    info!("Step 1/5: Resolving settings...");
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CompareConfig::default(),
    };
    let settings = resolve_settings(&args, &config);
    debug!("Settings: {:?}", settings);

    // Step 2: Load documents
    info!("Step 2/5: Loading documents...");
    let original = load_document(&args.original)
        .with_context(|| format!("Failed to load original {}", args.original.display()))?;
    let modified = load_document(&args.modified)
        .with_context(|| format!("Failed to load modified {}", args.modified.display()))?;

    // Step 3: Diff
    info!("Step 3/5: Diffing at {} granularity...", settings.granularity);
    let comparison = compare_documents(
        &original,
        &modified,
        settings.granularity,
        &settings.options,
        &settings.block_options,
        &settings.classes,
    );
    info!("Diff: {}", comparison.stats.summary());

    let report = build_report(&original, &modified, comparison, settings.title.clone());

    // Step 4: Write outputs
    info!("Step 4/5: Writing output files...");
    if let Some(path) = &args.output_html {
        write_html_report(&report, &settings.classes, path)
            .context("Failed to write HTML report")?;
        println!("Diff page written to {}", path.display().to_string().cyan());
    }
    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write JSON report")?;
        println!("Diff report written to {}", path.display().to_string().cyan());
    }

    // Step 5: Terminal summary
    if args.print_summary {
        println!("{}", render_terminal_diff(&report, settings.terminal_changes));
    }

    info!(
        "Comparison completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    if args.fail_on_changes && report.has_changes() {
        if report.stats.has_changes() {
            anyhow::bail!("Documents differ ({} change(s))", report.stats.change_count);
        }
        anyhow::bail!("Documents differ in formatting only");
    }

    Ok(report)
}

/// Validate compare arguments
///
/// **Public** - can be called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    for (label, path) in [("Original", &args.original), ("Modified", &args.modified)] {
        if path.as_os_str().is_empty() {
            anyhow::bail!("{} document path cannot be empty", label);
        }
        if !path.is_file() {
            anyhow::bail!("{} document not found: {}", label, path.display());
        }
        DocumentFormat::from_path(path)
            .with_context(|| format!("{} document has an unsupported format", label))?;
    }

    if args.output_html.is_none() && args.output_json.is_none() && !args.print_summary {
        anyhow::bail!("Nothing to do: pass --html, --json or --summary");
    }

    if let Some(config) = &args.config {
        if !config.is_file() {
            anyhow::bail!("Config file not found: {}", config.display());
        }
    }

    Ok(())
}

/// CLI flags win over the config file, defaults fill the rest
fn resolve_settings(args: &CompareArgs, config: &CompareConfig) -> CompareSettings {
    let diff = &config.diff;

    let options = DiffOptions {
        algorithm: args.algorithm.or(diff.algorithm).unwrap_or_default(),
        ignore_case: args.ignore_case || diff.ignore_case.unwrap_or(false),
        ignore_whitespace: !args.strict_whitespace && diff.ignore_whitespace.unwrap_or(true),
        timeout_ms: diff.timeout_ms,
    };

    let block_options = BlockOptions {
        inline_changes: !args.no_inline && diff.inline_changes.unwrap_or(true),
        min_similarity: diff.min_similarity.unwrap_or(DEFAULT_MIN_SIMILARITY),
    };

    CompareSettings {
        granularity: args.granularity.or(diff.granularity).unwrap_or_default(),
        options,
        block_options,
        classes: config.classes(),
        title: args
            .title
            .clone()
            .or_else(|| config.render.title.clone())
            .unwrap_or_else(|| DEFAULT_REPORT_TITLE.to_string()),
        terminal_changes: config
            .render
            .terminal_changes
            .unwrap_or(DEFAULT_TERMINAL_CHANGES),
    }
}
