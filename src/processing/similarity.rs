//! Overlap and cosine similarity between document profiles

use crate::processing::document::{DocumentProfile, KeywordBag};
use std::collections::HashSet;

/// Keywords the resume shares with the JD, in the order of their first
/// occurrence in the JD keyword sequence, de-duplicated.
pub fn overlapping_keywords(jd: &DocumentProfile, resume: &DocumentProfile) -> Vec<String> {
    let mut seen = HashSet::new();
    jd.keywords
        .iter()
        .filter(|k| resume.keyword_set.contains(k.as_str()) && seen.insert(k.as_str()))
        .cloned()
        .collect()
}

/// Fraction of the JD's distinct keywords covered by the resume.
/// Directional: the denominator is the JD keyword-set size, so this
/// answers "how much of the requirement is covered", not a Jaccard index.
/// The denominator floors at 1 so an empty JD yields 0, never NaN.
pub fn overlap_ratio(jd: &DocumentProfile, overlap_count: usize) -> f32 {
    overlap_count as f32 / jd.keyword_set.len().max(1) as f32
}

/// Cosine similarity between two term-frequency bags. An empty bag's norm
/// is defined as 1 so the result is 0 rather than undefined.
pub fn cosine_similarity(a: &KeywordBag, b: &KeywordBag) -> f32 {
    let dot: f32 = a
        .iter()
        .filter_map(|(k, &va)| b.get(k).map(|&vb| va as f32 * vb as f32))
        .sum();

    dot / (norm(a) * norm(b))
}

fn norm(bag: &KeywordBag) -> f32 {
    if bag.is_empty() {
        return 1.0;
    }
    bag.values().map(|&v| (v as f32) * (v as f32)).sum::<f32>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::text_processor::TextProcessor;

    fn profile(text: &str) -> DocumentProfile {
        TextProcessor::default().profile(text)
    }

    #[test]
    fn test_overlap_is_directional() {
        let jd = profile("python aws docker");
        let resume = profile("python aws docker kubernetes terraform golang");

        let overlap = overlapping_keywords(&jd, &resume);
        // Full coverage of the JD even though the resume has more terms.
        assert_eq!(overlap_ratio(&jd, overlap.len()), 1.0);
    }

    #[test]
    fn test_overlap_keeps_jd_order() {
        let jd = profile("kubernetes python aws");
        let resume = profile("aws experience plus python and kubernetes");

        let overlap = overlapping_keywords(&jd, &resume);
        assert_eq!(overlap, vec!["kubernetes", "python", "aws"]);
    }

    #[test]
    fn test_empty_jd_yields_zero_not_nan() {
        let jd = profile("");
        let resume = profile("python aws");

        let overlap = overlapping_keywords(&jd, &resume);
        let ratio = overlap_ratio(&jd, overlap.len());
        assert_eq!(ratio, 0.0);
        assert!(!ratio.is_nan());
    }

    #[test]
    fn test_cosine_of_empty_bag_is_zero() {
        let jd = profile("python aws");
        let resume = profile("");

        let sim = cosine_similarity(&jd.bag, &resume.bag);
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());
    }

    #[test]
    fn test_cosine_of_identical_bags_is_one() {
        let a = profile("python aws python docker");
        let b = profile("python aws python docker");

        let sim = cosine_similarity(&a.bag, &b.bag);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_of_disjoint_bags_is_zero() {
        let a = profile("python aws");
        let b = profile("marketing outreach");

        assert_eq!(cosine_similarity(&a.bag, &b.bag), 0.0);
    }
}
