//! Markup model over html5ever.
//!
//! Parses HTML (fragments or full documents) into top-level blocks or a
//! flat token stream where tags are atomic and text is split into words.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::cell::RefCell;

use crate::diff::tokenizer::tokenize_words;
use crate::utils::config::{RAW_TEXT_TAGS, VOID_TAGS};

// Elements whose text starts on a new line when flattening a block to text
const LINE_BREAKING_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure",
    "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "li", "ol", "p", "pre", "section",
    "table", "tr", "ul",
];

/// A top-level element (or loose text) of the document body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlBlock {
    /// Element name, `None` for loose text
    pub tag: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub inner_html: String,
    pub outer_html: String,
    /// Flattened text, trimmed
    pub text: String,
}

/// Kind of a markup token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupTokenKind {
    Open,
    Close,
    Void,
    Text,
}

/// An atomic unit of a markup diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupToken {
    pub kind: MarkupTokenKind,

    /// Serialized HTML for this token (escaped for text)
    pub markup: String,

    /// Raw text for text tokens, element name for tags
    pub text: String,
}

impl MarkupToken {
    fn text(word: &str) -> Self {
        Self {
            kind: MarkupTokenKind::Text,
            markup: escape_html(word),
            text: word.to_string(),
        }
    }

    fn tag(kind: MarkupTokenKind, name: &str, markup: String) -> Self {
        Self {
            kind,
            markup,
            text: name.to_string(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == MarkupTokenKind::Text
    }
}

/// Parse HTML into the top-level blocks of its body
///
/// Whitespace-only text and comments between blocks are skipped.
pub fn parse_blocks(html: &str) -> Vec<HtmlBlock> {
    let Some((_dom, body)) = parse_body(html) else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    for child in body.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if text.trim().is_empty() {
                    continue;
                }
                let escaped = escape_html(&text);
                blocks.push(HtmlBlock {
                    tag: None,
                    attributes: Vec::new(),
                    inner_html: escaped.clone(),
                    outer_html: escaped,
                    text: text.trim().to_string(),
                });
            }
            NodeData::Element { name, attrs, .. } => {
                let tag = name.local.to_string();
                let attributes = collect_attributes(attrs);

                let mut inner_html = String::new();
                serialize_children(child, &mut inner_html);

                let mut outer_html = String::new();
                serialize_node(child, &mut outer_html);

                let mut text = String::new();
                if tag != "script" && tag != "style" {
                    collect_text(child, &mut text);
                }

                blocks.push(HtmlBlock {
                    tag: Some(tag),
                    attributes,
                    inner_html,
                    outer_html,
                    text: text.trim().to_string(),
                });
            }
            _ => {}
        }
    }

    blocks
}

/// Flatten HTML into tag and word tokens
pub fn tokenize_markup(html: &str) -> Vec<MarkupToken> {
    let mut tokens = Vec::new();
    if let Some((_dom, body)) = parse_body(html) {
        tokenize_children(&body, &mut tokens);
    }
    tokens
}

/// Plain text of an HTML document, blocks separated by a blank line
pub fn text_content(html: &str) -> String {
    parse_blocks(html)
        .into_iter()
        .map(|block| block.text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Escape text content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a double-quoted attribute value
pub fn escape_attribute(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}

/// Serialize a start tag; void elements are self-closed
pub fn start_tag(tag: &str, attributes: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    if is_void(tag) {
        out.push_str(" />");
    } else {
        out.push('>');
    }
    out
}

/// Copy of `attributes` with `class` merged into the class attribute
pub fn with_class(attributes: &[(String, String)], class: &str) -> Vec<(String, String)> {
    let mut merged = attributes.to_vec();
    match merged.iter_mut().find(|(name, _)| name == "class") {
        Some((_, value)) => {
            if !value.split_whitespace().any(|existing| existing == class) {
                if !value.trim().is_empty() {
                    value.push(' ');
                }
                value.push_str(class);
            }
        }
        None => merged.push(("class".to_string(), class.to_string())),
    }
    merged
}

pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Elements whose content is raw text (scripts, styles and the like)
pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_TAGS.contains(&tag)
}

/// Parse and locate `<body>`
///
/// The dom is returned alongside: dropping it empties every node's children.
fn parse_body(html: &str) -> Option<(RcDom, Handle)> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    let body = find_element(&dom.document, "body")?;
    Some((dom, body))
}

fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data {
        if name.local.as_ref().eq_ignore_ascii_case(tag) {
            return Some(node.clone());
        }
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

fn collect_attributes(attrs: &RefCell<Vec<html5ever::Attribute>>) -> Vec<(String, String)> {
    attrs
        .borrow()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

fn serialize_node(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&escape_html(&contents.borrow())),
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.to_string();
            out.push_str(&start_tag(&tag, &collect_attributes(attrs)));
            if is_raw_text(&tag) {
                push_raw_text(node, out);
                out.push_str(&format!("</{}>", tag));
            } else if !is_void(&tag) {
                serialize_children(node, out);
                out.push_str("</");
                out.push_str(&tag);
                out.push('>');
            }
        }
        _ => {}
    }
}

fn push_raw_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            out.push_str(&contents.borrow());
        }
    }
}

fn serialize_children(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        serialize_node(child, out);
    }
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { name, .. } => {
                let tag = name.local.to_string();
                if tag == "br" {
                    out.push('\n');
                    continue;
                }
                if tag == "script" || tag == "style" {
                    continue;
                }
                if LINE_BREAKING_TAGS.contains(&tag.as_str())
                    && !out.is_empty()
                    && !out.ends_with('\n')
                {
                    out.push('\n');
                }
                if tag == "td" || tag == "th" {
                    if !out.is_empty() && !out.ends_with('\n') && !out.ends_with('\t') {
                        out.push('\t');
                    }
                }
                collect_text(child, out);
            }
            _ => {}
        }
    }
}

fn tokenize_children(node: &Handle, tokens: &mut Vec<MarkupToken>) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let text = contents.borrow();
                tokens.extend(tokenize_words(&text).into_iter().map(MarkupToken::text));
            }
            NodeData::Element { name, attrs, .. } => {
                let tag = name.local.to_string();
                if is_raw_text(&tag) {
                    // Atomic: raw content must never receive highlight spans
                    let mut markup = String::new();
                    serialize_node(child, &mut markup);
                    tokens.push(MarkupToken::tag(MarkupTokenKind::Void, &tag, markup));
                    continue;
                }
                let markup = start_tag(&tag, &collect_attributes(attrs));
                if is_void(&tag) {
                    tokens.push(MarkupToken::tag(MarkupTokenKind::Void, &tag, markup));
                } else {
                    tokens.push(MarkupToken::tag(MarkupTokenKind::Open, &tag, markup));
                    tokenize_children(child, tokens);
                    tokens.push(MarkupToken::tag(
                        MarkupTokenKind::Close,
                        &tag,
                        format!("</{}>", tag),
                    ));
                }
            }
            _ => {}
        }
    }
}
