//! Input manager: loads files and runs the best-effort extraction cascade

use crate::error::{Result, ShortlistError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::document::{ExtractedDocument, ResumeFile};
use log::{info, warn};
use std::path::Path;
use tokio::fs;

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a file from disk into a `ResumeFile`. The filename carried
    /// forward is the path's final component.
    pub async fn load(&self, path: &Path) -> Result<ResumeFile> {
        if !path.exists() {
            return Err(ShortlistError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        let bytes = fs::read(path).await?;
        Ok(ResumeFile::new(filename, bytes))
    }

    /// Best-effort text extraction. Never fails: a parse failure in a
    /// binary format degrades to empty text so one corrupt file cannot
    /// abort a batch.
    pub fn extract_text(&self, file: &ResumeFile) -> ExtractedDocument {
        let file_type = FileType::detect(&file.filename, &file.bytes);
        info!("Extracting {} as {:?}", file.filename, file_type);

        let extracted = match file_type {
            FileType::Pdf => PdfExtractor.extract(&file.bytes),
            FileType::Docx => DocxExtractor.extract(&file.bytes),
            FileType::Text => PlainTextExtractor.extract(&file.bytes),
        };

        let text = extracted.unwrap_or_else(|e| {
            warn!("Extraction failed for {}: {}", file.filename, e);
            String::new()
        });

        ExtractedDocument::new(file.filename.clone(), text)
    }

    /// Load and extract a whole batch, preserving submission order.
    pub async fn load_batch(&self, paths: &[std::path::PathBuf]) -> Result<Vec<ExtractedDocument>> {
        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let file = self.load(path).await?;
            documents.push(self.extract_text(&file));
        }
        Ok(documents)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
