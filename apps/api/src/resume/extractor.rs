//! Text extraction: turns uploaded resume bytes into plain text.
//!
//! Only the content-type check can fail. Decoding problems are absorbed and
//! reported as a sentinel string starting with `Error:` so the upload still
//! completes and the parser always receives text.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, warn};

pub const PDF: &str = "application/pdf";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PLAIN_TEXT: &str = "text/plain";

/// Content types accepted by [`extract`], in the order they are advertised.
pub const SUPPORTED_CONTENT_TYPES: &[&str] = &[PDF, DOCX, PLAIN_TEXT];

/// Prefix shared by every extraction sentinel.
pub const FAILURE_PREFIX: &str = "Error:";

const TXT_FAILURE: &str =
    "Error: Could not extract text from this TXT file. The file may not be valid UTF-8 text.";
const PDF_FAILURE: &str = "Error: Could not extract text from this PDF file. \
     The file may be corrupted, password-protected, or use an unsupported PDF structure.";
const DOCX_FAILURE: &str = "Error: Could not extract text from this DOCX file. \
     The file may be corrupted, password-protected, or use an unsupported document structure.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Resolves a MIME type, ignoring parameters such as `; charset=utf-8`
    /// and letter case.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            PDF => Some(Self::Pdf),
            DOCX => Some(Self::Docx),
            PLAIN_TEXT => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// Extracts plain text from `bytes` according to `content_type`.
pub fn extract(bytes: &[u8], content_type: &str) -> Result<String, ExtractError> {
    let kind = DocumentKind::from_content_type(content_type)
        .ok_or_else(|| ExtractError::UnsupportedFormat(content_type.to_string()))?;

    let text = match kind {
        DocumentKind::PlainText => extract_plain_text(bytes),
        DocumentKind::Pdf => extract_pdf(bytes),
        DocumentKind::Docx => extract_docx(bytes),
    };

    debug!(
        ?kind,
        input_bytes = bytes.len(),
        output_chars = text.chars().count(),
        "Text extraction finished"
    );
    Ok(text)
}

/// True when `text` is one of the extraction sentinels.
pub fn is_extraction_failure(text: &str) -> bool {
    text.starts_with(FAILURE_PREFIX)
}

fn extract_plain_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            warn!("Plain-text resume is not valid UTF-8: {e}");
            TXT_FAILURE.to_string()
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> String {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    match result {
        Ok(Ok(text)) => {
            if text.trim().is_empty() {
                warn!("PDF decoded but contained no extractable text");
            }
            text
        }
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            PDF_FAILURE.to_string()
        }
        Err(_) => {
            warn!("PDF extraction panicked");
            PDF_FAILURE.to_string()
        }
    }
}

fn extract_docx(bytes: &[u8]) -> String {
    match docx_rs::read_docx(bytes) {
        Ok(docx) => {
            let mut text = String::new();
            for child in &docx.document.children {
                match child {
                    docx_rs::DocumentChild::Paragraph(paragraph) => {
                        push_paragraph(&mut text, paragraph);
                    }
                    docx_rs::DocumentChild::Table(table) => push_table(&mut text, table),
                    _ => {}
                }
            }
            text
        }
        Err(e) => {
            warn!("DOCX extraction failed: {e}");
            DOCX_FAILURE.to_string()
        }
    }
}

fn push_paragraph(out: &mut String, paragraph: &docx_rs::Paragraph) {
    push_paragraph_children(out, &paragraph.children);
    out.push('\n');
}

fn push_paragraph_children(out: &mut String, children: &[docx_rs::ParagraphChild]) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run(out, run),
            docx_rs::ParagraphChild::Hyperlink(link) => push_paragraph_children(out, &link.children),
            _ => {}
        }
    }
}

fn push_run(out: &mut String, run: &docx_rs::Run) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => out.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => out.push('\t'),
            docx_rs::RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[allow(irrefutable_let_patterns)]
fn push_table(out: &mut String, table: &docx_rs::Table) {
    for row in &table.rows {
        let docx_rs::TableChild::TableRow(row) = row else {
            continue;
        };
        for cell in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            for content in &cell.children {
                match content {
                    docx_rs::TableCellContent::Paragraph(paragraph) => {
                        push_paragraph(out, paragraph)
                    }
                    docx_rs::TableCellContent::Table(nested) => push_table(out, nested),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docx_fixture(lines: &[&str]) -> Vec<u8> {
        let mut docx = docx_rs::Docx::new();
        for line in lines {
            docx = docx.add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(*line)),
            );
        }
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_plain_text_is_passed_through() {
        let text = "Jane Doe\nSkills: Python, Excel, SQL\nCafé ✓";
        assert_eq!(extract(text.as_bytes(), PLAIN_TEXT).unwrap(), text);
    }

    #[test]
    fn test_content_type_parameters_and_case_are_ignored() {
        let out = extract(b"hello", "Text/Plain; charset=utf-8").unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_invalid_utf8_yields_txt_sentinel() {
        let out = extract(&[0xff, 0xfe, 0x00, 0xc3], PLAIN_TEXT).unwrap();
        assert!(is_extraction_failure(&out));
        assert!(out.contains("TXT"));
    }

    #[test]
    fn test_unsupported_format_names_the_type() {
        let err = extract(b"\x89PNG", "image/png").unwrap_err();
        assert_eq!(err, ExtractError::UnsupportedFormat("image/png".to_string()));
        assert!(err.to_string().contains("image/png"));
    }

    #[test]
    fn test_garbage_pdf_yields_pdf_sentinel() {
        let out = extract(b"definitely not a pdf", PDF).unwrap();
        assert!(is_extraction_failure(&out));
        assert!(out.contains("PDF"));
    }

    #[test]
    fn test_garbage_docx_yields_docx_sentinel() {
        let out = extract(b"not a zip archive", DOCX).unwrap();
        assert!(is_extraction_failure(&out));
        assert!(out.contains("DOCX"));
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let bytes = docx_fixture(&["Jane Doe", "jane.doe@example.com", "Skills: Rust, SQL"]);
        let out = extract(&bytes, DOCX).unwrap();
        assert!(!is_extraction_failure(&out));
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec!["Jane Doe", "jane.doe@example.com", "Skills: Rust, SQL"]
        );
    }

    #[test]
    fn test_docx_table_cells_are_read_in_order() {
        let cell = |text: &str| {
            docx_rs::TableCell::new().add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(text)),
            )
        };
        let table = docx_rs::Table::new(vec![
            docx_rs::TableRow::new(vec![cell("Python"), cell("SQL")]),
            docx_rs::TableRow::new(vec![cell("Docker"), cell("Excel")]),
        ]);
        let docx = docx_rs::Docx::new()
            .add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("Skills")),
            )
            .add_table(table);
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();

        let out = extract(&buf.into_inner(), DOCX).unwrap();
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec!["Skills", "Python", "SQL", "Docker", "Excel"]
        );
    }

    #[test]
    fn test_supported_types_resolve() {
        for content_type in SUPPORTED_CONTENT_TYPES {
            assert!(DocumentKind::from_content_type(content_type).is_some());
        }
        assert_eq!(DocumentKind::from_content_type("application/msword"), None);
    }

    #[test]
    fn test_real_text_is_not_flagged_as_failure() {
        assert!(!is_extraction_failure("Errors were reduced by 40%"));
    }
}
