//! Text extraction from raw file bytes
//!
//! Each handler returns an explicit result; deciding what to do with a
//! failure (degrade to empty text) is the manager's job, not the
//! handler's.

use crate::error::{Result, ShortlistError};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ShortlistError::Extraction(format!("Failed to parse PDF: {}", e)))
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let docx = read_docx(bytes)
            .map_err(|e| ShortlistError::Extraction(format!("Failed to parse DOCX: {}", e)))?;

        let mut text = String::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                for paragraph_child in &paragraph.children {
                    if let ParagraphChild::Run(run) = paragraph_child {
                        for run_child in &run.children {
                            if let RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                text.push('\n');
            }
        }

        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // Lossy decode: garbled characters beat losing the document.
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
