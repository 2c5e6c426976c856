//! File type detection

/// The closed set of formats the extraction cascade knows about. Anything
/// else is treated as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
}

const PDF_MAGIC: &[u8] = b"%PDF";
// DOCX is an OOXML zip container.
const ZIP_MAGIC: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

impl FileType {
    /// Content sniff first, filename extension second, plain text last.
    pub fn detect(filename: &str, bytes: &[u8]) -> Self {
        if bytes.starts_with(PDF_MAGIC) {
            return FileType::Pdf;
        }
        if bytes.starts_with(ZIP_MAGIC) {
            return FileType::Docx;
        }
        Self::from_extension(filename)
    }

    fn from_extension(filename: &str) -> Self {
        let lowered = filename.to_lowercase();
        if lowered.ends_with(".pdf") {
            FileType::Pdf
        } else if lowered.ends_with(".docx") {
            FileType::Docx
        } else {
            FileType::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic_wins_over_extension() {
        assert_eq!(FileType::detect("resume.txt", b"%PDF-1.7 rest"), FileType::Pdf);
    }

    #[test]
    fn test_zip_magic_detected_as_docx() {
        let bytes = [0x50, 0x4B, 0x03, 0x04, 0x00, 0x00];
        assert_eq!(FileType::detect("resume.bin", &bytes), FileType::Docx);
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(FileType::detect("resume.PDF", b"no magic here"), FileType::Pdf);
        assert_eq!(FileType::detect("resume.docx", b"no magic here"), FileType::Docx);
        assert_eq!(FileType::detect("resume.txt", b"plain"), FileType::Text);
        assert_eq!(FileType::detect("resume", b"plain"), FileType::Text);
    }
}
