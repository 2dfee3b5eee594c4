//! Output writers for comparison results.
//!
//! This module handles writing data to disk in various formats:
//! - JSON diff reports
//! - Standalone HTML pages
//! - Plain text and converted HTML (for the convert command)
//! - Coloured terminal summaries

pub mod html;
pub mod json;
pub mod terminal;

pub use html::{render_html_page, write_html_report, write_text};
pub use json::{build_report, read_report, write_report, DiffReport, DocumentMetadata};
pub use terminal::render_terminal_diff;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Validate that an output path is usable
///
/// **Public** - shared by every writer
///
/// # Errors
/// * `OutputError::InvalidPath` - Empty path or an existing directory
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate the path and create missing parent directories
///
/// **Private** - internal to the writers
fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_prepare_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a/b/report.json");
        prepare_output_path(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());
    }
}
