//! Integration tests for document loading and DOCX conversion.

use doc_diff_studio::document::{convert_docx_bytes, load_document, DocumentFormat};
use doc_diff_studio::utils::error::DocumentError;
use pretty_assertions::assert_eq;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#;

/// Build a DOCX archive from (part name, contents) pairs
fn build_docx(parts: &[(&str, String)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document {}><w:body>{}</w:body></w:document>"#,
        W_NS, body
    )
}

fn paragraph(style: Option<&str>, text: &str) -> String {
    let props = style
        .map(|s| format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, s))
        .unwrap_or_default();
    format!(r#"<w:p>{}<w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, props, text)
}

fn write_docx(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, build_docx(&[("word/document.xml", document_xml(body))])).unwrap();
    path
}

#[test]
fn test_convert_docx_with_styles_and_numbering() {
    let styles = format!(
        r#"<w:styles {}>
            <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
            <w:style w:type="paragraph" w:styleId="ListParagraph"><w:name w:val="List Paragraph"/></w:style>
        </w:styles>"#,
        W_NS
    );
    let numbering = format!(
        r#"<w:numbering {}>
            <w:abstractNum w:abstractNumId="3"><w:lvl w:ilvl="0"><w:numFmt w:val="decimal"/></w:lvl></w:abstractNum>
            <w:num w:numId="1"><w:abstractNumId w:val="3"/></w:num>
        </w:numbering>"#,
        W_NS
    );
    let item = |text: &str| {
        format!(
            r#"<w:p><w:pPr><w:pStyle w:val="ListParagraph"/><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>{}</w:t></w:r></w:p>"#,
            text
        )
    };
    let body = format!(
        "{}{}{}{}",
        paragraph(Some("Heading1"), "Terms"),
        paragraph(None, "Intro"),
        item("first"),
        item("second")
    );

    let bytes = build_docx(&[
        ("word/document.xml", document_xml(&body)),
        ("word/styles.xml", styles),
        ("word/numbering.xml", numbering),
    ]);
    let conversion = convert_docx_bytes(&bytes).unwrap();

    assert_eq!(
        conversion.html,
        "<h1>Terms</h1><p>Intro</p><ol><li>first</li><li>second</li></ol>"
    );
    assert_eq!(conversion.text, "Terms\n\nIntro\n\nfirst\n\nsecond\n\n");
    assert!(conversion.warnings.is_empty());
}

#[test]
fn test_missing_document_part() {
    let bytes = build_docx(&[("word/styles.xml", "<w:styles/>".to_string())]);
    assert!(matches!(
        convert_docx_bytes(&bytes),
        Err(DocumentError::MissingPart(_))
    ));
}

#[test]
fn test_not_a_zip() {
    assert!(matches!(
        convert_docx_bytes(b"plain text, not an archive"),
        Err(DocumentError::Zip(_))
    ));
}

#[test]
fn test_load_document_dispatches_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let docx = write_docx(dir.path(), "a.docx", &paragraph(None, "From Word"));
    let html = dir.path().join("b.html");
    std::fs::write(&html, "<p>From HTML</p>").unwrap();
    let text = dir.path().join("c.txt");
    std::fs::write(&text, "From text").unwrap();

    let docx = load_document(&docx).unwrap();
    assert_eq!(docx.format, DocumentFormat::Docx);
    assert_eq!(docx.html, "<p>From Word</p>");

    let html = load_document(&html).unwrap();
    assert_eq!(html.format, DocumentFormat::Html);
    assert_eq!(html.text, "From HTML");

    let text = load_document(&text).unwrap();
    assert_eq!(text.format, DocumentFormat::Text);
    assert_eq!(text.html, "<p>From text</p>");
}

#[test]
fn test_load_document_reports_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(dir.path(), "w.docx", &paragraph(Some("FancyQuote"), "quoted"));

    let document = load_document(&path).unwrap();
    assert_eq!(document.html, "<p>quoted</p>");
    assert_eq!(
        document.warnings,
        vec!["Unrecognised paragraph style: 'FancyQuote' (Style ID: FancyQuote)".to_string()]
    );
}

#[test]
fn test_load_missing_file() {
    let result = load_document("definitely/not/here.docx");
    match result {
        Err(DocumentError::Io { path, .. }) => assert!(path.contains("here.docx")),
        other => panic!("expected Io error, got {:?}", other),
    }
}
