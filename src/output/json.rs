//! JSON diff report writer.
//!
//! Writes DiffReport structs to JSON files with pretty formatting and reads
//! them back for the `validate` command.

use crate::diff::{BlockChange, Change, Comparison, DiffStats, Granularity};
use crate::document::{Document, DocumentFormat};
use crate::utils::config::REPORT_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::{file_size, prepare_output_path};

/// Summary of one compared document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: String,
    pub format: DocumentFormat,
    pub paragraphs: usize,
    pub characters: usize,

    #[serde(default)]
    pub warnings: Vec<String>,
}

impl DocumentMetadata {
    pub fn from_document(document: &Document) -> Self {
        Self {
            source: document.source.clone(),
            format: document.format,
            paragraphs: document.paragraph_count(),
            characters: document.char_count(),
            warnings: document.warnings.clone(),
        }
    }
}

/// Serializable result of a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    /// Report schema version
    pub report_version: String,

    /// RFC 3339 timestamp
    pub generated_at: String,

    #[serde(default)]
    pub title: String,

    pub granularity: Granularity,
    pub original: DocumentMetadata,
    pub modified: DocumentMetadata,
    pub stats: DiffStats,
    pub changes: Vec<Change>,

    #[serde(default)]
    pub blocks: Vec<BlockChange>,

    /// Highlighted HTML fragment
    pub html: String,

    /// Markup differs even where the text does not
    #[serde(default)]
    pub markup_changed: bool,
}

impl DiffReport {
    /// Whether the documents differ in text or in markup
    pub fn has_changes(&self) -> bool {
        self.stats.has_changes() || self.markup_changed
    }
}

/// Assemble a report from loaded documents and their comparison
pub fn build_report(
    original: &Document,
    modified: &Document,
    comparison: Comparison,
    title: impl Into<String>,
) -> DiffReport {
    DiffReport {
        report_version: REPORT_VERSION.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        title: title.into(),
        granularity: comparison.granularity,
        original: DocumentMetadata::from_document(original),
        modified: DocumentMetadata::from_document(modified),
        stats: comparison.stats,
        changes: comparison.changes,
        blocks: comparison.blocks,
        html: comparison.html,
        markup_changed: comparison.markup_changed,
    }
}

/// Write a diff report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = build_report(&original, &modified, comparison, "Draft review");
/// write_report(&report, "diff.json")?;
/// ```
pub fn write_report(report: &DiffReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON report to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;

    info!(
        "JSON report written successfully ({} bytes)",
        file_size(output_path)
    );

    Ok(())
}

/// Read a diff report from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<DiffReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: DiffReport = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Report loaded: version {}, granularity {}",
        report.report_version, report.granularity
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{compare_documents, BlockOptions, DiffOptions};
    use crate::utils::config::CssClasses;
    use tempfile::NamedTempFile;

    fn create_test_report() -> DiffReport {
        let original = Document::from_text("a.txt", "The quick brown fox");
        let modified = Document::from_text("b.txt", "The slow brown fox");
        let comparison = compare_documents(
            &original,
            &modified,
            Granularity::Words,
            &DiffOptions::default(),
            &BlockOptions::default(),
            &CssClasses::default(),
        );
        build_report(&original, &modified, comparison, "Test")
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded.report_version, REPORT_VERSION);
        assert_eq!(loaded.granularity, Granularity::Words);
        assert_eq!(loaded.original.source, "a.txt");
        assert_eq!(loaded.changes, report.changes);
        assert_eq!(loaded.html, report.html);
        assert!(loaded.has_changes());
    }

    #[test]
    fn test_generated_at_is_rfc3339() {
        let report = create_test_report();
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{ not json").unwrap();
        assert!(matches!(
            read_report(temp_file.path()),
            Err(OutputError::SerializationFailed(_))
        ));
    }
}
