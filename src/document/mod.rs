//! Input document loading.
//!
//! This module handles:
//! - Detecting the input format from the file extension
//! - Converting DOCX to HTML and raw text
//! - Wrapping HTML and plain text inputs in the same model

pub mod docx;
pub mod html;

pub use docx::{convert_docx, convert_docx_bytes, parse_document_xml, DocxContext, DocxConversion};
pub use html::{parse_blocks, text_content, tokenize_markup, HtmlBlock, MarkupToken, MarkupTokenKind};

use crate::utils::config::SUPPORTED_EXTENSIONS;
use crate::utils::error::DocumentError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Input format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Docx,
    Html,
    Text,
}

impl DocumentFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "html" | "htm" => Ok(DocumentFormat::Html),
            "txt" | "text" | "md" => Ok(DocumentFormat::Text),
            _ => Err(DocumentError::UnsupportedFormat(format!(
                "{} (expected one of: {})",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Html => "html",
            DocumentFormat::Text => "text",
        };
        f.write_str(name)
    }
}

/// A loaded document in both HTML and plain-text form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Where the document came from (usually the path)
    pub source: String,
    pub format: DocumentFormat,
    pub html: String,
    pub text: String,
    /// Conversion warnings (unrecognised styles and the like)
    pub warnings: Vec<String>,
}

impl Document {
    /// Wrap an HTML document; the text is its blocks joined by blank lines
    pub fn from_html(source: impl Into<String>, html: impl Into<String>) -> Self {
        let html = html.into();
        let text = text_content(&html);
        Self {
            source: source.into(),
            format: DocumentFormat::Html,
            html,
            text,
            warnings: Vec::new(),
        }
    }

    /// Wrap plain text; each blank-line separated paragraph becomes a `<p>`
    pub fn from_text(source: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let html = paragraphs(&text)
            .map(|para| {
                let lines: Vec<String> = para.lines().map(html::escape_html).collect();
                format!("<p>{}</p>", lines.join("<br />"))
            })
            .collect();

        Self {
            source: source.into(),
            format: DocumentFormat::Text,
            html,
            text,
            warnings: Vec::new(),
        }
    }

    /// Number of non-empty paragraphs in the plain text
    pub fn paragraph_count(&self) -> usize {
        paragraphs(&self.text).count()
    }

    /// Number of characters in the plain text
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Load a document from disk, converting by extension
///
/// **Public** - main entry point for inputs
///
/// # Errors
/// * `DocumentError::UnsupportedFormat` - Unknown extension
/// * `DocumentError::Io` - File cannot be read
/// * `DocumentError::Zip` / `Xml` / `MissingPart` - Broken DOCX
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, DocumentError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let source = path.display().to_string();

    info!("Loading {} document: {}", format, source);

    let document = match format {
        DocumentFormat::Docx => {
            let conversion = convert_docx(path)?;
            for warning in &conversion.warnings {
                warn!("{}: {}", source, warning);
            }
            Document {
                source,
                format,
                html: conversion.html,
                text: conversion.text,
                warnings: conversion.warnings,
            }
        }
        DocumentFormat::Html => Document::from_html(source, read_to_string(path)?),
        DocumentFormat::Text => Document::from_text(source, read_to_string(path)?),
    };

    debug!(
        "Loaded {}: {} paragraphs, {} characters",
        document.source,
        document.paragraph_count(),
        document.char_count()
    );

    Ok(document)
}

fn read_to_string(path: &Path) -> Result<String, DocumentError> {
    fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })
}

// Blank-line separated, trimmed, non-empty
fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n")
        .flat_map(|chunk| chunk.split("\r\n\r\n"))
        .map(str::trim)
        .filter(|para| !para.is_empty())
}
