//! Text extraction from various file formats

use crate::error::{Result, ResumeProfilerError};
use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Cursor, Read};
use std::sync::LazyLock;

static RTF_HEX_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\'([0-9a-fA-F]{2})").expect("Invalid RTF hex regex"));
static RTF_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:par|line)\b ?").expect("Invalid RTF break regex"));
static RTF_CONTROL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+-?\d*").expect("Invalid RTF control regex"));

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract can panic on malformed fonts instead of returning an error
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        match outcome {
            Ok(Ok(text)) => {
                debug!("PDF extraction produced {} chars", text.len());
                Ok(text)
            }
            Ok(Err(e)) => {
                warn!("PDF extraction failed: {}", e);
                Err(ResumeProfilerError::DecodeFailure(format!(
                    "Failed to extract text from PDF: {}",
                    e
                )))
            }
            Err(_) => {
                warn!("PDF extraction panicked, document is likely malformed");
                Err(ResumeProfilerError::DecodeFailure(
                    "PDF extraction aborted: malformed document".to_string(),
                ))
            }
        }
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let doc = docx_rs::read_docx(bytes).map_err(|e| {
            ResumeProfilerError::DecodeFailure(format!("Failed to read DOCX: {}", e))
        })?;

        let mut text = String::new();
        for child in &doc.document.children {
            Self::collect_child(child, &mut text);
        }
        debug!("DOCX extraction produced {} chars", text.len());
        Ok(text)
    }
}

impl DocxExtractor {
    fn collect_child(element: &docx_rs::DocumentChild, output: &mut String) {
        match element {
            docx_rs::DocumentChild::Paragraph(para) => {
                Self::collect_paragraph(para, output);
                output.push('\n');
            }
            docx_rs::DocumentChild::Table(table) => {
                for row in &table.rows {
                    let docx_rs::TableChild::TableRow(tr) = row;
                    for cell in &tr.cells {
                        let docx_rs::TableRowChild::TableCell(tc) = cell;
                        for content in &tc.children {
                            if let docx_rs::TableCellContent::Paragraph(para) = content {
                                Self::collect_paragraph(para, output);
                                output.push('\n');
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn collect_paragraph(para: &docx_rs::Paragraph, output: &mut String) {
        for child in &para.children {
            match child {
                docx_rs::ParagraphChild::Run(run) => Self::collect_run(run, output),
                docx_rs::ParagraphChild::Hyperlink(link) => {
                    for inner in &link.children {
                        if let docx_rs::ParagraphChild::Run(run) = inner {
                            Self::collect_run(run, output);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn collect_run(run: &docx_rs::Run, output: &mut String) {
        for run_child in &run.children {
            match run_child {
                docx_rs::RunChild::Text(text) => output.push_str(&text.text),
                docx_rs::RunChild::Tab(_) => output.push(' '),
                docx_rs::RunChild::Break(_) => output.push('\n'),
                _ => {}
            }
        }
    }
}

pub struct OdtExtractor;

impl TextExtractor for OdtExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ResumeProfilerError::DecodeFailure(format!("Failed to open ODT archive: {}", e))
        })?;

        let mut content = String::new();
        archive
            .by_name("content.xml")
            .map_err(|e| {
                ResumeProfilerError::DecodeFailure(format!("ODT archive has no content.xml: {}", e))
            })?
            .read_to_string(&mut content)
            .map_err(|e| {
                ResumeProfilerError::DecodeFailure(format!("Failed to read ODT content: {}", e))
            })?;

        let text = Self::content_to_text(&content)?;
        debug!("ODT extraction produced {} chars", text.len());
        Ok(text)
    }
}

impl OdtExtractor {
    /// Flatten an OpenDocument `content.xml` body into newline separated text.
    fn content_to_text(xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        // Only text inside paragraphs and headings is visible content.
        let mut depth = 0usize;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    if matches!(e.name().as_ref(), b"text:p" | b"text:h") {
                        depth += 1;
                    }
                }
                Ok(Event::Text(e)) if depth > 0 => {
                    let chunk = e.unescape().map_err(|err| {
                        ResumeProfilerError::DecodeFailure(format!("Malformed ODT text: {}", err))
                    })?;
                    text.push_str(&chunk);
                }
                Ok(Event::End(e)) => {
                    if matches!(e.name().as_ref(), b"text:p" | b"text:h") {
                        depth = depth.saturating_sub(1);
                        text.push('\n');
                    }
                }
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"text:line-break" | b"text:p" | b"text:h" => text.push('\n'),
                    b"text:tab" | b"text:s" if depth > 0 => text.push(' '),
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ResumeProfilerError::DecodeFailure(format!(
                        "Malformed ODT content at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let content = String::from_utf8_lossy(bytes);
        Ok(content.trim_start_matches('\u{feff}').to_string())
    }
}

pub struct RtfExtractor;

impl TextExtractor for RtfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let raw = String::from_utf8_lossy(bytes);
        Ok(Self::strip_rtf(&raw))
    }
}

impl RtfExtractor {
    /// Drop control words and group braces, keeping the visible text.
    pub fn strip_rtf(raw: &str) -> String {
        let decoded = RTF_HEX_ESCAPE.replace_all(raw, |caps: &regex::Captures| {
            u8::from_str_radix(&caps[1], 16)
                .map(|byte| char::from(byte).to_string())
                .unwrap_or_default()
        });
        let with_breaks = RTF_BREAK.replace_all(&decoded, "\n");
        let without_controls = RTF_CONTROL_WORD.replace_all(&with_breaks, "");

        without_controls
            .chars()
            .filter(|c| *c != '{' && *c != '}')
            .collect::<String>()
            .trim()
            .to_string()
    }
}
