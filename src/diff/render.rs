//! Highlighted HTML for plain-text change runs.

use super::schema::{Change, ChangeKind};
use crate::document::html::escape_html;
use crate::utils::config::CssClasses;

/// Render change runs as escaped HTML with highlighted spans
///
/// Newlines become `<br />` so line structure survives inline rendering.
pub fn render_changes(changes: &[Change], classes: &CssClasses) -> String {
    let mut out = String::new();

    for change in changes {
        let body = escape_html(&change.value).replace('\n', "<br />");
        match change.kind {
            ChangeKind::Unchanged => out.push_str(&body),
            ChangeKind::Added => push_span(&mut out, &classes.added, &body),
            ChangeKind::Removed => push_span(&mut out, &classes.removed, &body),
        }
    }

    out
}

/// Append `<span class="...">body</span>`
pub(crate) fn push_span(out: &mut String, class: &str, body: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(body);
    out.push_str("</span>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_escapes_and_wraps() {
        let changes = vec![
            Change::new(ChangeKind::Unchanged, "a < b ", 4),
            Change::new(ChangeKind::Removed, "old", 1),
            Change::new(ChangeKind::Added, "new\nline", 3),
        ];

        assert_eq!(
            render_changes(&changes, &CssClasses::default()),
            "a &lt; b <span class=\"removed\">old</span><span class=\"added\">new<br />line</span>"
        );
    }
}
