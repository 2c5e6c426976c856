//! Text normalization, tokenization, and keyword extraction

use crate::processing::document::{DocumentProfile, KeywordBag};
use regex::Regex;
use std::collections::HashSet;

/// Common English function words that would otherwise dominate the
/// overlap and cosine metrics.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "can", "could",
    "for", "from", "had", "has", "have", "he", "her", "his", "if", "in",
    "is", "it", "its", "may", "might", "must", "of", "on", "or", "our",
    "shall", "she", "should", "that", "the", "their", "them", "they",
    "this", "to", "was", "we", "were", "will", "with", "would", "you",
    "your",
];

pub struct TextProcessor {
    stop_words: HashSet<String>,
    min_keyword_length: usize,
    separator_regex: Regex,
}

impl TextProcessor {
    pub fn new(min_keyword_length: usize) -> Self {
        // Anything outside the token charset acts as a separator. The
        // charset keeps "+", "." and "#" so tokens like "c++", "node.js"
        // and "c#" survive intact.
        let separator_regex = Regex::new(r"[^a-z0-9+.#]+").expect("Invalid separator regex");

        Self {
            stop_words: STOP_WORDS.iter().map(|&s| s.to_string()).collect(),
            min_keyword_length,
            separator_regex,
        }
    }

    /// Lower-case the text, collapse separator runs to single spaces, and
    /// split on whitespace. Always succeeds; empty input yields an empty
    /// sequence. Source order is preserved.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.separator_regex
            .replace_all(&lowered, " ")
            .split_whitespace()
            .map(|t| t.to_string())
            .collect()
    }

    /// Retain tokens long enough to carry signal and not in the stop-word
    /// set. Order-preserving, repeats kept.
    pub fn filter_keywords(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| t.len() >= self.min_keyword_length && !self.stop_words.contains(t.as_str()))
            .cloned()
            .collect()
    }

    /// Term-frequency bag over a keyword sequence. Raw counts, no
    /// normalization.
    pub fn build_bag(keywords: &[String]) -> KeywordBag {
        let mut bag = KeywordBag::new();
        for keyword in keywords {
            *bag.entry(keyword.clone()).or_insert(0) += 1;
        }
        bag
    }

    /// Derive all lexical structures for one document in a single pass.
    pub fn profile(&self, text: &str) -> DocumentProfile {
        let tokens = self.tokenize(text);
        let keywords = self.filter_keywords(&tokens);
        let keyword_set: HashSet<String> = keywords.iter().cloned().collect();
        let bag = Self::build_bag(&keywords);

        DocumentProfile {
            tokens,
            keywords,
            keyword_set,
            bag,
        }
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_preserves_tech_tokens() {
        let processor = TextProcessor::default();
        let tokens = processor.tokenize("Expert in C++, C# and Node.js development");

        assert!(tokens.contains(&"c++".to_string()));
        assert!(tokens.contains(&"c#".to_string()));
        assert!(tokens.contains(&"node.js".to_string()));
        assert!(tokens.contains(&"development".to_string()));
    }

    #[test]
    fn test_tokenize_empty_input() {
        let processor = TextProcessor::default();
        assert!(processor.tokenize("").is_empty());
        assert!(processor.tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_order() {
        let processor = TextProcessor::default();
        let tokens = processor.tokenize("Senior Backend Engineer");
        assert_eq!(tokens, vec!["senior", "backend", "engineer"]);
    }

    #[test]
    fn test_filter_drops_stop_words_and_short_tokens() {
        let processor = TextProcessor::default();
        let tokens = processor.tokenize("We are looking for an engineer with Go and AWS");
        let keywords = processor.filter_keywords(&tokens);

        assert!(keywords.contains(&"engineer".to_string()));
        assert!(keywords.contains(&"aws".to_string()));
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"are".to_string()));
        // "go" is below the default length threshold
        assert!(!keywords.contains(&"go".to_string()));
    }

    #[test]
    fn test_bag_counts_occurrences() {
        let processor = TextProcessor::default();
        let profile = processor.profile("python python rust");

        assert_eq!(profile.bag.get("python"), Some(&2));
        assert_eq!(profile.bag.get("rust"), Some(&1));
    }

    #[test]
    fn test_profile_keyword_set_is_distinct() {
        let processor = TextProcessor::default();
        let profile = processor.profile("docker docker docker kubernetes");

        assert_eq!(profile.keywords.len(), 4);
        assert_eq!(profile.keyword_set.len(), 2);
    }
}
