//! Word-level diff over HTML that keeps the markup intact.
//!
//! Tags are atomic tokens compared by their serialized form; text is
//! compared word by word. Output follows the new document's structure:
//! added tags are kept, removed tags are dropped, and only text runs are
//! wrapped in highlight spans. Stripping the removed spans from the output
//! leaves the new document's markup.

use similar::DiffTag;

use super::engine::{comparison_key, diff_ops};
use super::render::push_span;
use super::schema::DiffOptions;
use crate::document::html::{tokenize_markup, MarkupToken};
use crate::utils::config::CssClasses;

/// Diff two HTML fragments word by word, preserving tags and attributes
///
/// # Example
/// ```ignore
/// let html = diff_markup("<p>Hello world</p>", "<p>Hello <b>there</b></p>", &options, &classes);
/// // <p>Hello <span class="removed">world</span><b><span class="added">there</span></b></p>
/// ```
pub fn diff_markup(
    old_html: &str,
    new_html: &str,
    options: &DiffOptions,
    classes: &CssClasses,
) -> String {
    let old_tokens = tokenize_markup(old_html);
    let new_tokens = tokenize_markup(new_html);
    render_token_diff(&old_tokens, &new_tokens, options, classes)
}

/// Diff pre-tokenized markup
pub(crate) fn render_token_diff(
    old: &[MarkupToken],
    new: &[MarkupToken],
    options: &DiffOptions,
    classes: &CssClasses,
) -> String {
    let old_keys: Vec<String> = old.iter().map(|t| token_key(t, options)).collect();
    let new_keys: Vec<String> = new.iter().map(|t| token_key(t, options)).collect();

    let mut out = String::new();
    for op in diff_ops(&old_keys, &new_keys, options) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for token in &new[new_range] {
                    out.push_str(&token.markup);
                }
            }
            DiffTag::Delete => emit_removed(&old[old_range], &classes.removed, &mut out),
            DiffTag::Insert => emit_added(&new[new_range], &classes.added, &mut out),
            DiffTag::Replace => {
                emit_removed(&old[old_range], &classes.removed, &mut out);
                emit_added(&new[new_range], &classes.added, &mut out);
            }
        }
    }

    out
}

/// Whether two HTML fragments differ in any tag, attribute or word
pub(crate) fn markup_differs(old_html: &str, new_html: &str, options: &DiffOptions) -> bool {
    let keys = |html: &str| -> Vec<String> {
        tokenize_markup(html)
            .iter()
            .map(|t| token_key(t, options))
            .collect()
    };
    keys(old_html) != keys(new_html)
}

fn token_key(token: &MarkupToken, options: &DiffOptions) -> String {
    if token.is_text() {
        comparison_key(&token.text, options)
    } else {
        token.markup.clone()
    }
}

// Removed tags are not part of the new document, so only their text survives
fn emit_removed(tokens: &[MarkupToken], class: &str, out: &mut String) {
    let mut run = String::new();
    for token in tokens {
        if token.is_text() {
            run.push_str(&token.markup);
        } else {
            flush_run(&mut run, class, out);
        }
    }
    flush_run(&mut run, class, out);
}

fn emit_added(tokens: &[MarkupToken], class: &str, out: &mut String) {
    let mut run = String::new();
    for token in tokens {
        if token.is_text() {
            run.push_str(&token.markup);
        } else {
            flush_run(&mut run, class, out);
            out.push_str(&token.markup);
        }
    }
    flush_run(&mut run, class, out);
}

fn flush_run(run: &mut String, class: &str, out: &mut String) {
    if !run.is_empty() {
        push_span(out, class, run);
        run.clear();
    }
}
