//! Core diff engine implementation.
//!
//! Runs `similar` over token comparison keys and folds the resulting
//! operations back into runs of original token text.

use log::debug;
use similar::{DiffOp, DiffTag};
use std::hash::Hash;
use std::time::{Duration, Instant};

use super::blocks::diff_blocks;
use super::markup::{diff_markup, markup_differs};
use super::render::render_changes;
use super::schema::{
    BlockChangeKind, BlockOptions, Change, ChangeKind, Comparison, DiffOptions, Granularity,
};
use super::stats::DiffStats;
use super::tokenizer::{
    is_whitespace_token, tokenize_chars, tokenize_lines, tokenize_sentences, tokenize_words,
};
use crate::document::Document;
use crate::utils::config::CssClasses;

/// Diff two token sequences into merged change runs
///
/// Tokens are compared by key (see [`DiffOptions`]); emitted values always
/// carry the original token text. Unchanged runs take the new side's text,
/// and within a replacement the removed run precedes the added one.
///
/// # Example
/// ```ignore
/// let changes = diff_tokens(&["a", " ", "b"], &["a", " ", "c"], &DiffOptions::default());
/// assert_eq!(changes.len(), 3);
/// ```
pub fn diff_tokens<S: AsRef<str>>(old: &[S], new: &[S], options: &DiffOptions) -> Vec<Change> {
    diff_tokens_by(old, new, options, |token| comparison_key(token, options))
}

/// Diff two token sequences with a custom comparison key
pub(crate) fn diff_tokens_by<S, F>(
    old: &[S],
    new: &[S],
    options: &DiffOptions,
    key: F,
) -> Vec<Change>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    let old_keys: Vec<String> = old.iter().map(|t| key(t.as_ref())).collect();
    let new_keys: Vec<String> = new.iter().map(|t| key(t.as_ref())).collect();

    let mut changes = Vec::new();
    for op in diff_ops(&old_keys, &new_keys, options) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push_run(&mut changes, ChangeKind::Unchanged, &new[new_range]),
            DiffTag::Delete => push_run(&mut changes, ChangeKind::Removed, &old[old_range]),
            DiffTag::Insert => push_run(&mut changes, ChangeKind::Added, &new[new_range]),
            DiffTag::Replace => {
                push_run(&mut changes, ChangeKind::Removed, &old[old_range]);
                push_run(&mut changes, ChangeKind::Added, &new[new_range]);
            }
        }
    }

    changes
}

/// Run the configured algorithm over comparison keys
pub(crate) fn diff_ops<K: Eq + Hash + Ord>(
    old: &[K],
    new: &[K],
    options: &DiffOptions,
) -> Vec<DiffOp> {
    let deadline = options
        .timeout_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));
    similar::capture_diff_slices_deadline(options.algorithm.into(), old, new, deadline)
}

/// Comparison key honouring case and whitespace options
pub(crate) fn comparison_key(token: &str, options: &DiffOptions) -> String {
    if options.ignore_whitespace && is_whitespace_token(token) {
        return " ".to_string();
    }
    if options.ignore_case {
        token.to_lowercase()
    } else {
        token.to_string()
    }
}

fn push_run<S: AsRef<str>>(changes: &mut Vec<Change>, kind: ChangeKind, tokens: &[S]) {
    if tokens.is_empty() {
        return;
    }

    let text: String = tokens.iter().map(AsRef::as_ref).collect();
    match changes.last_mut() {
        Some(last) if last.kind == kind => {
            last.value.push_str(&text);
            last.count += tokens.len();
        }
        _ => changes.push(Change::new(kind, text, tokens.len())),
    }
}

/// Word-level diff of two strings
pub fn diff_words(old: &str, new: &str, options: &DiffOptions) -> Vec<Change> {
    diff_tokens(&tokenize_words(old), &tokenize_words(new), options)
}

/// Character-level diff of two strings
pub fn diff_chars(old: &str, new: &str, options: &DiffOptions) -> Vec<Change> {
    diff_tokens(&tokenize_chars(old), &tokenize_chars(new), options)
}

/// Sentence-level diff of two strings
pub fn diff_sentences(old: &str, new: &str, options: &DiffOptions) -> Vec<Change> {
    diff_tokens(&tokenize_sentences(old), &tokenize_sentences(new), options)
}

/// Line-level diff of two strings
///
/// With `ignore_whitespace`, lines are compared trimmed with inner runs collapsed.
pub fn diff_lines(old: &str, new: &str, options: &DiffOptions) -> Vec<Change> {
    diff_tokens_by(&tokenize_lines(old), &tokenize_lines(new), options, |line| {
        let line = if options.ignore_whitespace {
            line.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            line.to_string()
        };
        if options.ignore_case {
            line.to_lowercase()
        } else {
            line
        }
    })
}

/// Plain-text diff at the given granularity
///
/// Structural granularities have no plain-text form and fall back to words.
pub fn diff_text(old: &str, new: &str, granularity: Granularity, options: &DiffOptions) -> Vec<Change> {
    match granularity {
        Granularity::Chars => diff_chars(old, new, options),
        Granularity::Sentences => diff_sentences(old, new, options),
        Granularity::Lines => diff_lines(old, new, options),
        Granularity::Words | Granularity::Markup | Granularity::Blocks => {
            diff_words(old, new, options)
        }
    }
}

/// Compare two loaded documents
///
/// **Public** - main entry point for the library
///
/// # Arguments
/// * `original` - The earlier document version
/// * `modified` - The later document version
/// * `granularity` - Unit of comparison
/// * `options` - Token comparison options
/// * `block_options` - Pairing options for block-level diffs
/// * `classes` - CSS classes for highlighted spans
///
/// # Returns
/// Comparison with highlighted HTML, change runs and statistics.
/// For `Markup` and `Blocks`, statistics come from a word diff of the plain text,
/// and `markup_changed` records differences the text diff cannot see.
pub fn compare_documents(
    original: &Document,
    modified: &Document,
    granularity: Granularity,
    options: &DiffOptions,
    block_options: &BlockOptions,
    classes: &CssClasses,
) -> Comparison {
    debug!(
        "Comparing {} -> {} at {} granularity",
        original.source, modified.source, granularity
    );

    let changes = diff_text(&original.text, &modified.text, granularity, options);
    let stats = DiffStats::from_changes(&changes);

    let (html, blocks, markup_changed) = match granularity {
        Granularity::Markup => (
            diff_markup(&original.html, &modified.html, options, classes),
            Vec::new(),
            markup_differs(&original.html, &modified.html, options),
        ),
        Granularity::Blocks => {
            let block_diff =
                diff_blocks(&original.html, &modified.html, options, block_options, classes);
            let changed = block_diff
                .changes
                .iter()
                .any(|b| b.kind != BlockChangeKind::Unchanged);
            (block_diff.html, block_diff.changes, changed)
        }
        _ => (render_changes(&changes, classes), Vec::new(), false),
    };

    debug!(
        "Diff produced {} change runs, {} blocks, similarity {:.3}",
        changes.len(),
        blocks.len(),
        stats.similarity
    );

    Comparison {
        granularity,
        changes,
        blocks,
        html,
        stats,
        markup_changed,
    }
}
