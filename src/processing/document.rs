//! Document types flowing through the scoring pipeline

use std::collections::{HashMap, HashSet};

/// Term-frequency bag: keyword mapped to its raw occurrence count.
pub type KeywordBag = HashMap<String, usize>;

/// A resume file as submitted: a filename and its raw byte payload.
/// Filenames identify results in the output but are not guaranteed unique.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// A document after best-effort text extraction. `text` is empty when
/// extraction failed; scoring still runs and degrades gracefully.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub filename: String,
    pub text: String,
    pub char_count: usize,
}

impl ExtractedDocument {
    pub fn new(filename: impl Into<String>, text: String) -> Self {
        let char_count = text.chars().count();
        Self {
            filename: filename.into(),
            text,
            char_count,
        }
    }
}

/// Derived lexical structures for one document.
#[derive(Debug, Clone, Default)]
pub struct DocumentProfile {
    /// Full token sequence, source order, unfiltered.
    pub tokens: Vec<String>,
    /// Keyword sequence after length and stop-word filtering, source order,
    /// repeats preserved.
    pub keywords: Vec<String>,
    /// Distinct keywords, for overlap math.
    pub keyword_set: HashSet<String>,
    /// Term-frequency bag over the keyword sequence.
    pub bag: KeywordBag,
}
