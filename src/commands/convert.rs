//! Convert command implementation.
//!
//! Loads one document and writes its HTML and/or plain text form.
//! Useful for checking how a DOCX will be seen by the differ.

use super::models::ConvertArgs;
use crate::document::{load_document, Document};
use crate::output::write_text;
use anyhow::{Context, Result};
use colored::*;
use log::info;

/// Execute the convert command
///
/// With neither `output_html` nor `output_text`, the HTML goes to stdout.
pub fn execute_convert(args: ConvertArgs) -> Result<Document> {
    let document = load_document(&args.input)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    info!(
        "Converted {} ({}): {} paragraphs",
        document.source,
        document.format,
        document.paragraph_count()
    );

    for warning in &document.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    if let Some(path) = &args.output_html {
        write_text(&document.html, path).context("Failed to write converted HTML")?;
        println!("HTML written to {}", path.display().to_string().cyan());
    }
    if let Some(path) = &args.output_text {
        write_text(&document.text, path).context("Failed to write extracted text")?;
        println!("Text written to {}", path.display().to_string().cyan());
    }
    if args.output_html.is_none() && args.output_text.is_none() {
        println!("{}", document.html);
    }

    Ok(document)
}
