//! Heuristic metadata extractors: experience duration, education level,
//! and the evidence snippet locator
//!
//! These are substring heuristics over raw resume text. They can
//! false-positive on near-miss abbreviations; that is a known limitation
//! of the approach, not something the extractors try to hide.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Highest education tier signaled by the resume text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "PhD")]
    Phd,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "Bachelor's")]
    Bachelors,
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EducationLevel::Phd => "PhD",
            EducationLevel::Masters => "Master's",
            EducationLevel::Bachelors => "Bachelor's",
        };
        write!(f, "{}", label)
    }
}

const PHD_MARKERS: &[&str] = &["phd", "doctor of philosophy"];
const MASTERS_MARKERS: &[&str] = &["master of", "msc", "m.s.", "m.tech", "mtech"];
const BACHELORS_MARKERS: &[&str] = &["bachelor of", "bsc", "b.e.", "b.tech", "btech"];

pub struct MetadataExtractor {
    experience_regex: Regex,
}

impl MetadataExtractor {
    pub fn new() -> Self {
        let experience_regex =
            Regex::new(r"(?i)\d+\+?\s*(?:years|yrs)").expect("Invalid experience regex");
        Self { experience_regex }
    }

    /// First duration phrase like "5 years" or "3+ yrs" in the raw text,
    /// returned as the literal matched substring.
    pub fn experience(&self, text: &str) -> Option<String> {
        self.experience_regex
            .find(text)
            .map(|m| m.as_str().to_string())
    }

    /// Tiered classifier over the lower-cased text; the highest tier with a
    /// marker present wins.
    pub fn education(&self, text: &str) -> Option<EducationLevel> {
        let lowered = text.to_lowercase();
        let contains_any = |markers: &[&str]| markers.iter().any(|m| lowered.contains(m));

        if contains_any(PHD_MARKERS) {
            Some(EducationLevel::Phd)
        } else if contains_any(MASTERS_MARKERS) {
            Some(EducationLevel::Masters)
        } else if contains_any(BACHELORS_MARKERS) {
            Some(EducationLevel::Bachelors)
        } else {
            None
        }
    }

    /// Contextual excerpt around the first JD keyword (in JD keyword order)
    /// present in the resume text. Falls back to the head of the document
    /// when no keyword occurs.
    pub fn snippet(
        &self,
        text: &str,
        jd_keywords: &[String],
        before: usize,
        after: usize,
        fallback_length: usize,
    ) -> String {
        let lowered = text.to_lowercase();
        // Window indices are computed on the lower-cased text. Lowercasing
        // only changes byte length for non-ASCII edge cases; slice the
        // lowered copy then so indices stay valid.
        let source = if lowered.len() == text.len() { text } else { lowered.as_str() };

        let position = jd_keywords
            .iter()
            .find_map(|k| lowered.find(k.as_str()));

        match position {
            Some(pos) => {
                let start = clamp_to_boundary_down(source, pos.saturating_sub(before));
                let end = clamp_to_boundary_up(source, (pos + after).min(source.len()));
                let mut excerpt = source[start..end].to_string();
                if end < source.len() {
                    excerpt.push_str("...");
                }
                excerpt
            }
            None => {
                let end = clamp_to_boundary_up(source, fallback_length.min(source.len()));
                let mut excerpt = source[..end].to_string();
                if end < source.len() {
                    excerpt.push_str("...");
                }
                excerpt
            }
        }
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_to_boundary_down(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn clamp_to_boundary_up(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_matches_plus_duration() {
        let extractor = MetadataExtractor::new();
        let found = extractor.experience("Engineer with 5+ years of experience");
        assert_eq!(found.as_deref(), Some("5+ years"));
    }

    #[test]
    fn test_experience_matches_yrs_abbreviation() {
        let extractor = MetadataExtractor::new();
        let found = extractor.experience("3 yrs in backend development");
        assert_eq!(found.as_deref(), Some("3 yrs"));
    }

    #[test]
    fn test_experience_no_duration_phrase() {
        let extractor = MetadataExtractor::new();
        assert_eq!(extractor.experience("Marketing specialist"), None);
    }

    #[test]
    fn test_education_phd_outranks_bachelor() {
        let extractor = MetadataExtractor::new();
        let level = extractor.education("PhD in CS, also holds a Bachelor of Engineering");
        assert_eq!(level, Some(EducationLevel::Phd));
    }

    #[test]
    fn test_education_masters_variants() {
        let extractor = MetadataExtractor::new();
        assert_eq!(
            extractor.education("MSc Computer Science"),
            Some(EducationLevel::Masters)
        );
        assert_eq!(
            extractor.education("M.Tech from IIT"),
            Some(EducationLevel::Masters)
        );
    }

    #[test]
    fn test_education_no_match() {
        let extractor = MetadataExtractor::new();
        assert_eq!(extractor.education("Self-taught developer"), None);
    }

    #[test]
    fn test_snippet_centers_on_first_jd_keyword() {
        let extractor = MetadataExtractor::new();
        let text = "Professional summary: highly skilled in React and Docker with production experience.";
        let jd_keywords = vec!["react".to_string(), "kubernetes".to_string()];

        let snippet = extractor.snippet(text, &jd_keywords, 80, 120, 200);
        assert!(snippet.contains("React"));
        // Window is anchored on the React occurrence, not Docker.
        assert!(snippet.starts_with("Professional summary"));
    }

    #[test]
    fn test_snippet_prefers_jd_keyword_order() {
        let extractor = MetadataExtractor::new();
        let long_pad = "x".repeat(300);
        let text = format!("docker here {} react over there", long_pad);
        let jd_keywords = vec!["react".to_string(), "docker".to_string()];

        let snippet = extractor.snippet(&text, &jd_keywords, 80, 120, 200);
        assert!(snippet.contains("react"));
        assert!(!snippet.contains("docker here"));
    }

    #[test]
    fn test_snippet_falls_back_to_head() {
        let extractor = MetadataExtractor::new();
        let text = "A".repeat(300);
        let jd_keywords = vec!["python".to_string()];

        let snippet = extractor.snippet(&text, &jd_keywords, 80, 120, 200);
        assert_eq!(snippet.len(), 203);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_snippet_short_text_without_ellipsis() {
        let extractor = MetadataExtractor::new();
        let snippet = extractor.snippet("Short resume", &["python".to_string()], 80, 120, 200);
        assert_eq!(snippet, "Short resume");
    }
}
