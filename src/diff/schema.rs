//! Schema definitions for diff results.
//!
//! Defines the options that drive a comparison and the structures
//! that represent differences between two documents.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::stats::DiffStats;

/// Unit of comparison
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Unicode scalar values of the plain text
    Chars,
    /// Words, whitespace runs and punctuation of the plain text
    #[default]
    Words,
    /// Sentences of the plain text
    Sentences,
    /// Lines of the plain text
    Lines,
    /// Words of the HTML, keeping tags and attributes intact
    Markup,
    /// Block elements of the HTML (paragraphs, headings, lists, tables)
    Blocks,
}

impl Granularity {
    /// Whether this granularity diffs HTML rather than plain text
    pub fn is_structural(self) -> bool {
        matches!(self, Granularity::Markup | Granularity::Blocks)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Chars => "chars",
            Granularity::Words => "words",
            Granularity::Sentences => "sentences",
            Granularity::Lines => "lines",
            Granularity::Markup => "markup",
            Granularity::Blocks => "blocks",
        };
        f.write_str(name)
    }
}

/// Sequence diff algorithm
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
}

impl From<DiffAlgorithm> for similar::Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => similar::Algorithm::Myers,
            DiffAlgorithm::Patience => similar::Algorithm::Patience,
        }
    }
}

/// Token comparison options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffOptions {
    pub algorithm: DiffAlgorithm,

    /// Compare tokens case-insensitively
    pub ignore_case: bool,

    /// Treat every whitespace run as equal to every other
    pub ignore_whitespace: bool,

    /// Give up refining the diff after this many milliseconds
    pub timeout_ms: Option<u64>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::Myers,
            ignore_case: false,
            ignore_whitespace: true,
            timeout_ms: None,
        }
    }
}

/// Block-level comparison options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockOptions {
    /// Show replaced blocks of the same kind as one block with inline changes
    pub inline_changes: bool,

    /// Minimum word similarity (0..=1) for two blocks to be paired
    pub min_similarity: f64,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self {
            inline_changes: true,
            min_similarity: crate::utils::config::DEFAULT_MIN_SIMILARITY,
        }
    }
}

/// Kind of a text change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Unchanged,
    Added,
    Removed,
}

/// A run of consecutive tokens sharing the same change kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub kind: ChangeKind,

    /// Concatenated token text
    pub value: String,

    /// Number of tokens in this run
    pub count: usize,
}

impl Change {
    pub fn new(kind: ChangeKind, value: impl Into<String>, count: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            count,
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind != ChangeKind::Unchanged
    }
}

/// Kind of a block change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockChangeKind {
    Unchanged,
    Added,
    Removed,
    /// Paired old/new block rendered with inline changes
    Modified,
}

/// One rendered block of a block-level diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockChange {
    pub kind: BlockChangeKind,

    /// Element name, `None` for loose top-level text
    pub tag: Option<String>,

    /// Rendered HTML for this block
    pub html: String,
}

/// Result of a block-level diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDiff {
    pub changes: Vec<BlockChange>,
    pub html: String,
}

/// Complete result of comparing two documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub granularity: Granularity,

    /// Text changes (plain-text granularities, and the word diff behind stats)
    pub changes: Vec<Change>,

    /// Block changes (blocks granularity only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<BlockChange>,

    /// Highlighted HTML fragment
    pub html: String,

    pub stats: DiffStats,

    /// Tags, attributes or block structure differ (markup and blocks only)
    #[serde(default)]
    pub markup_changed: bool,
}

impl Comparison {
    /// Whether the documents differ in text or in markup
    pub fn has_changes(&self) -> bool {
        self.stats.has_changes() || self.markup_changed
    }
}
