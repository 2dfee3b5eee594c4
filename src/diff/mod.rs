//! Document diff generation.
//!
//! This module compares two documents and produces highlighted HTML at
//! character, word, sentence, line, markup or block granularity.
//!
//! # Example
//! ```ignore
//! use doc_diff_studio::diff::{compare_documents, BlockOptions, DiffOptions, Granularity};
//! use doc_diff_studio::document::load_document;
//!
//! let original = load_document("v1.docx")?;
//! let modified = load_document("v2.docx")?;
//! let comparison = compare_documents(
//!     &original,
//!     &modified,
//!     Granularity::Blocks,
//!     &DiffOptions::default(),
//!     &BlockOptions::default(),
//!     &CssClasses::default(),
//! );
//! println!("{}", comparison.html);
//! ```

mod blocks;
mod engine;
mod markup;
mod render;
mod schema;
mod stats;
pub mod tokenizer;

// Public API exports
pub use blocks::diff_blocks;
pub use engine::{
    compare_documents, diff_chars, diff_lines, diff_sentences, diff_text, diff_tokens, diff_words,
};
pub use markup::diff_markup;
pub use render::render_changes;
pub use schema::{
    BlockChange, BlockChangeKind, BlockDiff, BlockOptions, Change, ChangeKind, Comparison,
    DiffAlgorithm, DiffOptions, Granularity,
};
pub use stats::DiffStats;
