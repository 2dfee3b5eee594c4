//! Block-level diff over HTML documents.
//!
//! Each top-level body element is one diff unit. Added and removed blocks
//! keep their own tag and attributes with a marker class merged in; replaced
//! blocks of the same kind can be paired and shown with inline word changes.

use log::debug;
use similar::DiffTag;

use super::engine::{diff_ops, diff_words};
use super::markup::render_token_diff;
use super::schema::{BlockChange, BlockChangeKind, BlockDiff, BlockOptions, DiffOptions};
use super::stats::DiffStats;
use crate::document::html::{
    is_raw_text, is_void, parse_blocks, start_tag, tokenize_markup, with_class, HtmlBlock,
    MarkupToken, MarkupTokenKind,
};
use crate::utils::config::CssClasses;

/// Diff two HTML documents block by block
///
/// # Arguments
/// * `old_html` / `new_html` - Documents to compare
/// * `options` - Token comparison options (case folding applies to block keys)
/// * `block_options` - Whether and when replaced blocks are paired
/// * `classes` - Marker classes merged into block attributes
///
/// # Returns
/// Per-block changes and the concatenated HTML
pub fn diff_blocks(
    old_html: &str,
    new_html: &str,
    options: &DiffOptions,
    block_options: &BlockOptions,
    classes: &CssClasses,
) -> BlockDiff {
    let old_blocks = parse_blocks(old_html);
    let new_blocks = parse_blocks(new_html);

    debug!(
        "Block diff: {} original blocks, {} modified blocks",
        old_blocks.len(),
        new_blocks.len()
    );

    let old_keys: Vec<String> = old_blocks.iter().map(|b| block_key(b, options)).collect();
    let new_keys: Vec<String> = new_blocks.iter().map(|b| block_key(b, options)).collect();

    let mut changes = Vec::new();
    for op in diff_ops(&old_keys, &new_keys, options) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                changes.extend(new_blocks[new_range].iter().map(unchanged_block));
            }
            DiffTag::Delete => {
                changes.extend(old_blocks[old_range].iter().map(|b| {
                    marked_block(b, BlockChangeKind::Removed, &classes.removed)
                }));
            }
            DiffTag::Insert => {
                changes.extend(
                    new_blocks[new_range]
                        .iter()
                        .map(|b| marked_block(b, BlockChangeKind::Added, &classes.added)),
                );
            }
            DiffTag::Replace => changes.extend(pair_replaced(
                &old_blocks[old_range],
                &new_blocks[new_range],
                options,
                block_options,
                classes,
            )),
        }
    }

    let html = changes.iter().map(|c| c.html.as_str()).collect();
    BlockDiff { changes, html }
}

fn block_key(block: &HtmlBlock, options: &DiffOptions) -> String {
    let key = if options.ignore_whitespace {
        block.outer_html.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        block.outer_html.clone()
    };
    if options.ignore_case {
        key.to_lowercase()
    } else {
        key
    }
}

/// Pair old and new blocks of a replaced range by position
///
/// Unpaired blocks are emitted removed-first; a pair flushes pending ones
/// so document order is kept.
fn pair_replaced(
    old: &[HtmlBlock],
    new: &[HtmlBlock],
    options: &DiffOptions,
    block_options: &BlockOptions,
    classes: &CssClasses,
) -> Vec<BlockChange> {
    let mut out = Vec::new();
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for i in 0..old.len().max(new.len()) {
        match (old.get(i), new.get(i)) {
            (Some(o), Some(n)) if block_options.inline_changes && can_pair(o, n, options, block_options) => {
                out.append(&mut removed);
                out.append(&mut added);
                out.push(modified_block(o, n, options, classes));
            }
            (o, n) => {
                if let Some(o) = o {
                    removed.push(marked_block(o, BlockChangeKind::Removed, &classes.removed));
                }
                if let Some(n) = n {
                    added.push(marked_block(n, BlockChangeKind::Added, &classes.added));
                }
            }
        }
    }

    out.append(&mut removed);
    out.append(&mut added);
    out
}

fn can_pair(
    old: &HtmlBlock,
    new: &HtmlBlock,
    options: &DiffOptions,
    block_options: &BlockOptions,
) -> bool {
    match (&old.tag, &new.tag) {
        (Some(a), Some(b)) if a == b && !is_void(a) && !is_raw_text(a) => {
            let similarity = DiffStats::from_changes(&diff_words(&old.text, &new.text, options))
                .similarity;
            similarity >= block_options.min_similarity
        }
        _ => false,
    }
}

fn unchanged_block(block: &HtmlBlock) -> BlockChange {
    BlockChange {
        kind: BlockChangeKind::Unchanged,
        tag: block.tag.clone(),
        html: block.outer_html.clone(),
    }
}

fn marked_block(block: &HtmlBlock, kind: BlockChangeKind, class: &str) -> BlockChange {
    let html = match &block.tag {
        Some(tag) => {
            let mut html = start_tag(tag, &with_class(&block.attributes, class));
            if !is_void(tag) {
                html.push_str(&block.inner_html);
                html.push_str(&format!("</{}>", tag));
            }
            html
        }
        None => format!("<div class=\"{}\">{}</div>", class, block.outer_html),
    };

    BlockChange {
        kind,
        tag: block.tag.clone(),
        html,
    }
}

// Only called for paired blocks, which always have a tag
fn modified_block(
    old: &HtmlBlock,
    new: &HtmlBlock,
    options: &DiffOptions,
    classes: &CssClasses,
) -> BlockChange {
    let tag = new.tag.clone().unwrap_or_default();
    let body = render_token_diff(&inner_tokens(old), &inner_tokens(new), options, classes);

    let mut html = start_tag(&tag, &with_class(&new.attributes, &classes.modified));
    html.push_str(&body);
    html.push_str(&format!("</{}>", tag));

    BlockChange {
        kind: BlockChangeKind::Modified,
        tag: Some(tag),
        html,
    }
}

/// Tokens inside a block's own element
///
/// Tokenizing the outer HTML keeps parser context (table rows need their table).
fn inner_tokens(block: &HtmlBlock) -> Vec<MarkupToken> {
    let mut tokens = tokenize_markup(&block.outer_html);
    let wraps_block = tokens.len() >= 2
        && tokens
            .first()
            .is_some_and(|t| t.kind == MarkupTokenKind::Open && Some(&t.text) == block.tag.as_ref())
        && tokens
            .last()
            .is_some_and(|t| t.kind == MarkupTokenKind::Close && Some(&t.text) == block.tag.as_ref());

    if wraps_block {
        tokens.pop();
        tokens.remove(0);
    }
    tokens
}
