//! Doc Diff Studio
//!
//! Compares two versions of a document (DOCX, HTML or plain text) and
//! renders the differences as highlighted HTML, a JSON report or a
//! coloured terminal summary.
//!
//! This crate provides the core implementation for the `doc-diff` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! doc-diff compare --original v1.docx --modified v2.docx --granularity blocks --html diff.html
//! ```
//!
//! The library can also be used directly:
//!
//! ```ignore
//! use doc_diff_studio::diff::{compare_documents, BlockOptions, DiffOptions, Granularity};
//! use doc_diff_studio::document::load_document;
//! use doc_diff_studio::utils::config::CssClasses;
//!
//! let comparison = compare_documents(
//!     &load_document("v1.docx")?,
//!     &load_document("v2.docx")?,
//!     Granularity::Words,
//!     &DiffOptions::default(),
//!     &BlockOptions::default(),
//!     &CssClasses::default(),
//! );
//! ```

pub mod commands;
pub mod diff;
pub mod document;
pub mod output;
pub mod utils;
