//! DOCX to HTML and raw text conversion.
//!
//! DOCX files are ZIP archives of WordprocessingML parts. We read
//! `word/document.xml` plus the optional styles, numbering and relationship
//! parts, build a small block model and render it as semantic HTML:
//! headings, paragraphs, nested lists, tables, links and basic run
//! formatting. Layout (fonts, spacing, images) is not carried over.

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

use super::html::escape_html;
use crate::utils::error::DocumentError;

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const NUMBERING_PART: &str = "word/numbering.xml";
const RELATIONSHIPS_PART: &str = "word/_rels/document.xml.rels";

/// Result of converting a DOCX document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxConversion {
    pub html: String,
    /// Every paragraph's text followed by a blank line, in document order
    pub text: String,
    pub warnings: Vec<String>,
}

/// Lookup tables from the auxiliary DOCX parts
#[derive(Debug, Clone, Default)]
pub struct DocxContext {
    /// styleId -> style name
    styles: HashMap<String, String>,
    /// numId -> (level -> ordered)
    numbering: HashMap<String, HashMap<u32, bool>>,
    /// relationship id -> target
    relationships: HashMap<String, String>,
}

impl DocxContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles_xml(mut self, xml: &str) -> Result<Self, DocumentError> {
        self.styles = parse_styles(xml)?;
        Ok(self)
    }

    pub fn with_numbering_xml(mut self, xml: &str) -> Result<Self, DocumentError> {
        self.numbering = parse_numbering(xml)?;
        Ok(self)
    }

    pub fn with_relationships_xml(mut self, xml: &str) -> Result<Self, DocumentError> {
        self.relationships = parse_relationships(xml)?;
        Ok(self)
    }

    fn is_ordered(&self, num_id: &str, level: u32) -> bool {
        self.numbering
            .get(num_id)
            .and_then(|levels| levels.get(&level))
            .copied()
            .unwrap_or(false)
    }
}

/// Convert a DOCX file on disk
pub fn convert_docx(path: impl AsRef<Path>) -> Result<DocxConversion, DocumentError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    convert_docx_bytes(&bytes)
}

/// Convert an in-memory DOCX archive
///
/// # Errors
/// * `DocumentError::Zip` - Not a ZIP archive
/// * `DocumentError::MissingPart` - No `word/document.xml`
/// * `DocumentError::Xml` - Malformed XML in any part we read
pub fn convert_docx_bytes(bytes: &[u8]) -> Result<DocxConversion, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let document_xml = read_part(&mut archive, DOCUMENT_PART)?
        .ok_or_else(|| DocumentError::MissingPart(DOCUMENT_PART.to_string()))?;

    let mut context = DocxContext::new();
    if let Some(xml) = read_part(&mut archive, STYLES_PART)? {
        context = context.with_styles_xml(&xml)?;
    }
    if let Some(xml) = read_part(&mut archive, NUMBERING_PART)? {
        context = context.with_numbering_xml(&xml)?;
    }
    if let Some(xml) = read_part(&mut archive, RELATIONSHIPS_PART)? {
        context = context.with_relationships_xml(&xml)?;
    }

    debug!(
        "DOCX context: {} styles, {} numbering definitions, {} relationships",
        context.styles.len(),
        context.numbering.len(),
        context.relationships.len()
    );

    parse_document_xml(&document_xml, &context)
}

/// Convert the main document part using pre-parsed lookup tables
pub fn parse_document_xml(
    xml: &str,
    context: &DocxContext,
) -> Result<DocxConversion, DocumentError> {
    let mut parser = BodyParser::new(context);
    walk_xml(DOCUMENT_PART, xml, |event| parser.handle(event))?;
    let (blocks, warnings) = parser.finish();

    let mut html = String::new();
    render_blocks(&blocks, &mut html);

    let mut text = String::new();
    collect_raw_text(&blocks, &mut text);

    Ok(DocxConversion {
        html,
        text,
        warnings,
    })
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, DocumentError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|source| DocumentError::Io {
            path: name.to_string(),
            source,
        })?;
    Ok(Some(xml))
}

// ============================================================================
// XML helpers
// ============================================================================

fn walk_xml<F>(part: &str, xml: &str, mut handle: F) -> Result<(), DocumentError>
where
    F: FnMut(Event<'_>) -> Result<(), DocumentError>,
{
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => handle(event)?,
            Err(e) => {
                return Err(DocumentError::Xml {
                    part: part.to_string(),
                    message: format!("error at position {}: {}", reader.buffer_position(), e),
                })
            }
        }
    }
    Ok(())
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// Whether a toggle property like `<w:b/>` or `<w:b w:val="0"/>` is on
fn is_on(e: &BytesStart<'_>) -> bool {
    !matches!(
        attr(e, b"w:val").as_deref(),
        Some("false") | Some("0") | Some("none") | Some("off")
    )
}

fn parse_styles(xml: &str) -> Result<HashMap<String, String>, DocumentError> {
    let mut styles = HashMap::new();
    let mut current: Option<String> = None;

    walk_xml(STYLES_PART, xml, |event| {
        match event {
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"w:style" => current = attr(&e, b"w:styleId"),
                b"w:name" => {
                    if let (Some(id), Some(name)) = (&current, attr(&e, b"w:val")) {
                        styles.insert(id.clone(), name);
                    }
                }
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"w:style" => current = None,
            _ => {}
        }
        Ok(())
    })?;

    Ok(styles)
}

fn parse_numbering(xml: &str) -> Result<HashMap<String, HashMap<u32, bool>>, DocumentError> {
    let mut abstract_levels: HashMap<String, HashMap<u32, bool>> = HashMap::new();
    let mut num_to_abstract: HashMap<String, String> = HashMap::new();

    let mut current_abstract: Option<String> = None;
    let mut current_level: Option<u32> = None;
    let mut current_num: Option<String> = None;

    walk_xml(NUMBERING_PART, xml, |event| {
        match event {
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"w:abstractNum" => current_abstract = attr(&e, b"w:abstractNumId"),
                b"w:lvl" => current_level = attr(&e, b"w:ilvl").and_then(|v| v.parse().ok()),
                b"w:numFmt" => {
                    if let (Some(abstract_id), Some(level)) = (&current_abstract, current_level) {
                        let ordered = attr(&e, b"w:val").as_deref() != Some("bullet");
                        abstract_levels
                            .entry(abstract_id.clone())
                            .or_default()
                            .insert(level, ordered);
                    }
                }
                b"w:num" => current_num = attr(&e, b"w:numId"),
                b"w:abstractNumId" => {
                    if let (Some(num_id), Some(abstract_id)) = (&current_num, attr(&e, b"w:val")) {
                        num_to_abstract.insert(num_id.clone(), abstract_id);
                    }
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:abstractNum" => current_abstract = None,
                b"w:lvl" => current_level = None,
                b"w:num" => current_num = None,
                _ => {}
            },
            _ => {}
        }
        Ok(())
    })?;

    Ok(num_to_abstract
        .into_iter()
        .filter_map(|(num_id, abstract_id)| {
            abstract_levels
                .get(&abstract_id)
                .map(|levels| (num_id, levels.clone()))
        })
        .collect())
}

fn parse_relationships(xml: &str) -> Result<HashMap<String, String>, DocumentError> {
    let mut relationships = HashMap::new();

    walk_xml(RELATIONSHIPS_PART, xml, |event| {
        if let Event::Start(e) | Event::Empty(e) = event {
            if e.local_name().as_ref() == b"Relationship" {
                if let (Some(id), Some(target)) = (attr(&e, b"Id"), attr(&e, b"Target")) {
                    relationships.insert(id, target);
                }
            }
        }
        Ok(())
    })?;

    Ok(relationships)
}

// ============================================================================
// Block model
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RunFormat {
    bold: bool,
    italic: bool,
    strike: bool,
    superscript: bool,
    subscript: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RunContent {
    Text(String),
    Break,
}

#[derive(Debug, Clone)]
struct Run {
    format: RunFormat,
    href: Option<String>,
    content: RunContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParagraphKind {
    Normal,
    Heading(u8),
}

#[derive(Debug, Clone, Copy)]
struct ListInfo {
    ordered: bool,
    level: u32,
}

#[derive(Debug, Clone)]
struct Paragraph {
    kind: ParagraphKind,
    list: Option<ListInfo>,
    runs: Vec<Run>,
}

impl Paragraph {
    fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| match &run.content {
            RunContent::Text(text) => text.is_empty(),
            RunContent::Break => false,
        })
    }

    fn text(&self) -> String {
        self.runs
            .iter()
            .map(|run| match &run.content {
                RunContent::Text(text) => text.as_str(),
                RunContent::Break => "\n",
            })
            .collect()
    }
}

/// rows -> cells -> cell content
type TableRows = Vec<Vec<Vec<Block>>>;

#[derive(Debug, Clone)]
enum Block {
    Paragraph(Paragraph),
    Table(TableRows),
}

#[derive(Debug, Default)]
struct ParagraphBuilder {
    style_id: Option<String>,
    num_id: Option<String>,
    level: u32,
    runs: Vec<Run>,
}

impl ParagraphBuilder {
    fn push_text(&mut self, format: &RunFormat, href: Option<String>, text: &str) {
        if let Some(Run {
            format: last_format,
            href: last_href,
            content: RunContent::Text(existing),
        }) = self.runs.last_mut()
        {
            if last_format == format && *last_href == href {
                existing.push_str(text);
                return;
            }
        }
        self.runs.push(Run {
            format: format.clone(),
            href,
            content: RunContent::Text(text.to_string()),
        });
    }

    fn push_break(&mut self, format: &RunFormat, href: Option<String>) {
        self.runs.push(Run {
            format: format.clone(),
            href,
            content: RunContent::Break,
        });
    }
}

#[derive(Debug, Default)]
struct TableBuilder {
    rows: TableRows,
    row: Vec<Vec<Block>>,
}

// ============================================================================
// document.xml parser
// ============================================================================

struct BodyParser<'a> {
    context: &'a DocxContext,
    /// Body content, then one entry per open table cell
    containers: Vec<Vec<Block>>,
    tables: Vec<TableBuilder>,
    paragraphs: Vec<ParagraphBuilder>,
    runs: Vec<RunFormat>,
    links: Vec<Option<String>>,
    in_ppr: bool,
    in_rpr: bool,
    in_text: bool,
    warnings: Vec<String>,
    warned_styles: HashSet<String>,
}

impl<'a> BodyParser<'a> {
    fn new(context: &'a DocxContext) -> Self {
        Self {
            context,
            containers: vec![Vec::new()],
            tables: Vec::new(),
            paragraphs: Vec::new(),
            runs: Vec::new(),
            links: Vec::new(),
            in_ppr: false,
            in_rpr: false,
            in_text: false,
            warnings: Vec::new(),
            warned_styles: HashSet::new(),
        }
    }

    fn handle(&mut self, event: Event<'_>) -> Result<(), DocumentError> {
        match event {
            Event::Start(e) => self.start(&e),
            Event::Empty(e) => {
                self.start(&e);
                self.end(e.name().as_ref());
            }
            Event::End(e) => self.end(e.name().as_ref()),
            Event::Text(e) if self.in_text => {
                let text = e.unescape().map_err(|err| DocumentError::Xml {
                    part: DOCUMENT_PART.to_string(),
                    message: err.to_string(),
                })?;
                self.append_text(&text);
            }
            _ => {}
        }
        Ok(())
    }

    fn start(&mut self, e: &BytesStart<'_>) {
        match e.name().as_ref() {
            b"w:tbl" => self.tables.push(TableBuilder::default()),
            b"w:tr" => {
                if let Some(table) = self.tables.last_mut() {
                    table.row = Vec::new();
                }
            }
            b"w:tc" => self.containers.push(Vec::new()),
            b"w:p" => self.paragraphs.push(ParagraphBuilder::default()),
            b"w:pPr" => self.in_ppr = true,
            b"w:pStyle" if self.in_ppr => {
                if let Some(paragraph) = self.paragraphs.last_mut() {
                    paragraph.style_id = attr(e, b"w:val");
                }
            }
            b"w:ilvl" if self.in_ppr => {
                if let Some(paragraph) = self.paragraphs.last_mut() {
                    paragraph.level = attr(e, b"w:val")
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(0);
                }
            }
            b"w:numId" if self.in_ppr => {
                if let Some(paragraph) = self.paragraphs.last_mut() {
                    paragraph.num_id = attr(e, b"w:val");
                }
            }
            b"w:r" => self.runs.push(RunFormat::default()),
            b"w:rPr" if !self.in_ppr && !self.runs.is_empty() => self.in_rpr = true,
            b"w:b" | b"w:i" | b"w:strike" | b"w:dstrike" | b"w:vertAlign" if self.in_rpr => {
                self.apply_run_property(e)
            }
            b"w:t" => self.in_text = !self.runs.is_empty(),
            b"w:tab" if !self.in_ppr && !self.in_rpr => self.append_text("\t"),
            b"w:br" => {
                let kind = attr(e, b"w:type");
                if matches!(kind.as_deref(), None | Some("textWrapping")) {
                    self.append_break();
                }
            }
            b"w:cr" => self.append_break(),
            b"w:hyperlink" => {
                let href = attr(e, b"r:id")
                    .and_then(|id| self.context.relationships.get(&id).cloned())
                    .or_else(|| attr(e, b"w:anchor").map(|anchor| format!("#{}", anchor)));
                self.links.push(href);
            }
            _ => {}
        }
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"w:t" => self.in_text = false,
            b"w:pPr" => self.in_ppr = false,
            b"w:rPr" => self.in_rpr = false,
            b"w:r" => {
                self.runs.pop();
            }
            b"w:hyperlink" => {
                self.links.pop();
            }
            b"w:p" => {
                if let Some(builder) = self.paragraphs.pop() {
                    let paragraph = self.finish_paragraph(builder);
                    self.push_block(Block::Paragraph(paragraph));
                }
            }
            b"w:tc" => {
                if self.containers.len() > 1 {
                    if let Some(cell) = self.containers.pop() {
                        if let Some(table) = self.tables.last_mut() {
                            table.row.push(cell);
                        }
                    }
                }
            }
            b"w:tr" => {
                if let Some(table) = self.tables.last_mut() {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            b"w:tbl" => {
                if let Some(table) = self.tables.pop() {
                    self.push_block(Block::Table(table.rows));
                }
            }
            _ => {}
        }
    }

    fn apply_run_property(&mut self, e: &BytesStart<'_>) {
        let Some(format) = self.runs.last_mut() else {
            return;
        };
        match e.name().as_ref() {
            b"w:b" => format.bold = is_on(e),
            b"w:i" => format.italic = is_on(e),
            b"w:strike" | b"w:dstrike" => format.strike = is_on(e),
            b"w:vertAlign" => {
                let value = attr(e, b"w:val");
                format.superscript = value.as_deref() == Some("superscript");
                format.subscript = value.as_deref() == Some("subscript");
            }
            _ => {}
        }
    }

    fn append_text(&mut self, text: &str) {
        let Some(format) = self.runs.last() else {
            return;
        };
        let href = self.links.last().cloned().flatten();
        if let Some(paragraph) = self.paragraphs.last_mut() {
            paragraph.push_text(format, href, text);
        }
    }

    fn append_break(&mut self) {
        let Some(format) = self.runs.last() else {
            return;
        };
        let href = self.links.last().cloned().flatten();
        if let Some(paragraph) = self.paragraphs.last_mut() {
            paragraph.push_break(format, href);
        }
    }

    fn push_block(&mut self, block: Block) {
        if let Some(container) = self.containers.last_mut() {
            container.push(block);
        }
    }

    fn finish_paragraph(&mut self, builder: ParagraphBuilder) -> Paragraph {
        let kind = match builder.style_id.as_deref() {
            Some(style_id) => self.resolve_style(style_id),
            None => ParagraphKind::Normal,
        };

        let list = match (kind, builder.num_id.as_deref()) {
            (ParagraphKind::Normal, Some(num_id)) if num_id != "0" => Some(ListInfo {
                ordered: self.context.is_ordered(num_id, builder.level),
                level: builder.level,
            }),
            _ => None,
        };

        Paragraph {
            kind,
            list,
            runs: builder.runs,
        }
    }

    /// Map a paragraph style to a heading level, warning once per unknown style
    fn resolve_style(&mut self, style_id: &str) -> ParagraphKind {
        let name = self
            .context
            .styles
            .get(style_id)
            .cloned()
            .unwrap_or_else(|| style_id.to_string());

        if let Some(kind) = heading_from_name(&name).or_else(|| heading_from_id(style_id)) {
            return kind;
        }

        let lower = name.to_lowercase();
        let known = matches!(lower.as_str(), "normal" | "list paragraph" | "listparagraph");
        if !known && self.warned_styles.insert(style_id.to_string()) {
            self.warnings.push(format!(
                "Unrecognised paragraph style: '{}' (Style ID: {})",
                name, style_id
            ));
        }
        ParagraphKind::Normal
    }

    fn finish(mut self) -> (Vec<Block>, Vec<String>) {
        // Unterminated tables in malformed input: keep what was parsed
        while let Some(table) = self.tables.pop() {
            if self.containers.len() > 1 {
                self.containers.pop();
            }
            self.push_block(Block::Table(table.rows));
        }
        let blocks = self.containers.into_iter().next().unwrap_or_default();
        (blocks, self.warnings)
    }
}

fn heading_from_name(name: &str) -> Option<ParagraphKind> {
    let lower = name.to_lowercase();
    if lower == "title" {
        return Some(ParagraphKind::Heading(1));
    }
    lower
        .strip_prefix("heading ")
        .and_then(|level| level.trim().parse::<u8>().ok())
        .filter(|level| (1..=6).contains(level))
        .map(ParagraphKind::Heading)
}

fn heading_from_id(style_id: &str) -> Option<ParagraphKind> {
    if style_id == "Title" {
        return Some(ParagraphKind::Heading(1));
    }
    style_id
        .strip_prefix("Heading")
        .and_then(|level| level.parse::<u8>().ok())
        .filter(|level| (1..=6).contains(level))
        .map(ParagraphKind::Heading)
}

// ============================================================================
// Rendering
// ============================================================================

fn render_blocks(blocks: &[Block], out: &mut String) {
    let mut lists = ListWriter::default();

    for block in blocks {
        match block {
            Block::Paragraph(paragraph) if paragraph.is_empty() => {}
            Block::Paragraph(paragraph) => match (paragraph.kind, paragraph.list) {
                (ParagraphKind::Normal, Some(list)) => {
                    lists.open_item(list, out);
                    render_runs(&paragraph.runs, out);
                }
                (kind, _) => {
                    lists.close_all(out);
                    let tag = match kind {
                        ParagraphKind::Heading(level) => format!("h{}", level),
                        ParagraphKind::Normal => "p".to_string(),
                    };
                    out.push_str(&format!("<{}>", tag));
                    render_runs(&paragraph.runs, out);
                    out.push_str(&format!("</{}>", tag));
                }
            },
            Block::Table(rows) => {
                lists.close_all(out);
                render_table(rows, out);
            }
        }
    }

    lists.close_all(out);
}

fn render_table(rows: &TableRows, out: &mut String) {
    out.push_str("<table>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            render_blocks(cell, out);
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
}

fn render_runs(runs: &[Run], out: &mut String) {
    let mut open_href: Option<&str> = None;

    for run in runs {
        let href = run.href.as_deref();
        if href != open_href {
            if open_href.is_some() {
                out.push_str("</a>");
            }
            if let Some(target) = href {
                out.push_str(&format!("<a href=\"{}\">", super::html::escape_attribute(target)));
            }
            open_href = href;
        }

        let wrappers = format_tags(&run.format);
        for tag in &wrappers {
            out.push_str(&format!("<{}>", tag));
        }
        match &run.content {
            RunContent::Text(text) => out.push_str(&escape_html(text)),
            RunContent::Break => out.push_str("<br />"),
        }
        for tag in wrappers.iter().rev() {
            out.push_str(&format!("</{}>", tag));
        }
    }

    if open_href.is_some() {
        out.push_str("</a>");
    }
}

fn format_tags(format: &RunFormat) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if format.bold {
        tags.push("strong");
    }
    if format.italic {
        tags.push("em");
    }
    if format.strike {
        tags.push("s");
    }
    if format.superscript {
        tags.push("sup");
    } else if format.subscript {
        tags.push("sub");
    }
    tags
}

#[derive(Debug)]
struct ListFrame {
    ordered: bool,
    item_open: bool,
}

/// Opens and closes nested `<ul>`/`<ol>` as list paragraphs arrive
#[derive(Debug, Default)]
struct ListWriter {
    frames: Vec<ListFrame>,
}

impl ListWriter {
    fn open_item(&mut self, list: ListInfo, out: &mut String) {
        let depth = list.level as usize + 1;

        while self.frames.len() > depth {
            self.close_frame(out);
        }
        if self.frames.len() == depth
            && self.frames.last().is_some_and(|f| f.ordered != list.ordered)
        {
            self.close_frame(out);
        }
        while self.frames.len() < depth {
            if let Some(parent) = self.frames.last_mut() {
                if !parent.item_open {
                    out.push_str("<li>");
                    parent.item_open = true;
                }
            }
            out.push_str(if list.ordered { "<ol>" } else { "<ul>" });
            self.frames.push(ListFrame {
                ordered: list.ordered,
                item_open: false,
            });
        }

        if let Some(top) = self.frames.last_mut() {
            if top.item_open {
                out.push_str("</li>");
            }
            out.push_str("<li>");
            top.item_open = true;
        }
    }

    fn close_frame(&mut self, out: &mut String) {
        if let Some(frame) = self.frames.pop() {
            if frame.item_open {
                out.push_str("</li>");
            }
            out.push_str(if frame.ordered { "</ol>" } else { "</ul>" });
        }
    }

    fn close_all(&mut self, out: &mut String) {
        while !self.frames.is_empty() {
            self.close_frame(out);
        }
    }
}

fn collect_raw_text(blocks: &[Block], out: &mut String) {
    for block in blocks {
        match block {
            Block::Paragraph(paragraph) => {
                out.push_str(&paragraph.text());
                out.push_str("\n\n");
            }
            Block::Table(rows) => {
                for cell in rows.iter().flatten() {
                    collect_raw_text(cell, out);
                }
            }
        }
    }
}
