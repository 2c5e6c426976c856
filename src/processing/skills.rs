//! Skill dictionary matching against resume text

use crate::config::SkillMatchMode;
use crate::error::{Result, ShortlistError};
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

/// Curated technology and process terms recognized independently of the
/// job description. All lowercase; multi-word entries included.
const DEFAULT_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "node",
    "node.js",
    "next.js",
    "python",
    "java",
    "c++",
    "c#",
    "golang",
    "ruby",
    "php",
    "sql",
    "nosql",
    "postgresql",
    "mongodb",
    "redis",
    "aws",
    "gcp",
    "azure",
    "docker",
    "kubernetes",
    "terraform",
    "ci/cd",
    "github actions",
    "git",
    "jira",
    "agile",
    "scrum",
    "ml",
    "nlp",
    "tensorflow",
    "pytorch",
    "html",
    "css",
    "tailwind",
    "kafka",
    "spark",
    "hadoop",
    "linux",
    "bash",
    "rest",
    "graphql",
    "microservices",
];

/// Matches the fixed skills dictionary against one resume.
///
/// `Text` mode scans the raw lower-cased text so multi-word entries like
/// "github actions" can hit; a boundary guard rejects matches embedded in
/// a longer token run (so "java" does not hit inside "javascript").
/// `Tokens` mode is a strict membership test against the full token
/// sequence.
pub struct SkillsMatcher {
    skills: Vec<String>,
    text_matcher: AhoCorasick,
    mode: SkillMatchMode,
}

impl SkillsMatcher {
    pub fn new(mode: SkillMatchMode, extra_skills: &[String]) -> Result<Self> {
        let mut skills: Vec<String> = DEFAULT_SKILLS.iter().map(|&s| s.to_string()).collect();
        for skill in extra_skills {
            let skill = skill.to_lowercase();
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }

        let text_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&skills)
            .map_err(|e| {
                ShortlistError::Configuration(format!("Failed to build skills matcher: {}", e))
            })?;

        Ok(Self {
            skills,
            text_matcher,
            mode,
        })
    }

    /// Distinct skill hits in dictionary order.
    pub fn find_hits(&self, text: &str, tokens: &[String]) -> Vec<String> {
        let hit_ids = match self.mode {
            SkillMatchMode::Text => self.text_hits(text),
            SkillMatchMode::Tokens => self.token_hits(tokens),
        };

        self.skills
            .iter()
            .enumerate()
            .filter(|(i, _)| hit_ids.contains(i))
            .map(|(_, s)| s.clone())
            .collect()
    }

    /// Skill coverage saturating at `saturation` hits, not relative to the
    /// dictionary size.
    pub fn score(&self, hit_count: usize, saturation: usize) -> f32 {
        (hit_count as f32 / saturation.max(1) as f32).min(1.0)
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    fn text_hits(&self, text: &str) -> HashSet<usize> {
        let lowered = text.to_lowercase();
        let bytes = lowered.as_bytes();
        let mut hits = HashSet::new();

        for mat in self.text_matcher.find_iter(&lowered) {
            let before_ok = mat.start() == 0 || !is_token_byte(bytes[mat.start() - 1]);
            let after_ok = mat.end() == bytes.len() || !is_token_byte(bytes[mat.end()]);
            if before_ok && after_ok {
                hits.insert(mat.pattern().as_usize());
            }
        }

        hits
    }

    fn token_hits(&self, tokens: &[String]) -> HashSet<usize> {
        let token_set: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
        self.skills
            .iter()
            .enumerate()
            .filter(|(_, s)| token_set.contains(s.as_str()))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Same charset the tokenizer treats as token-internal.
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'+' | b'.' | b'#')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::text_processor::TextProcessor;

    fn matcher(mode: SkillMatchMode) -> SkillsMatcher {
        SkillsMatcher::new(mode, &[]).unwrap()
    }

    #[test]
    fn test_text_mode_finds_multi_word_skills() {
        let m = matcher(SkillMatchMode::Text);
        let hits = m.find_hits("Deployed with GitHub Actions and a CI/CD pipeline", &[]);

        assert!(hits.contains(&"github actions".to_string()));
        assert!(hits.contains(&"ci/cd".to_string()));
    }

    #[test]
    fn test_text_mode_respects_token_boundaries() {
        let m = matcher(SkillMatchMode::Text);
        let hits = m.find_hits("Skilled in JavaScript development", &[]);

        assert!(hits.contains(&"javascript".to_string()));
        // "java" must not hit inside "javascript"
        assert!(!hits.contains(&"java".to_string()));
    }

    #[test]
    fn test_token_mode_membership() {
        let processor = TextProcessor::default();
        let tokens = processor.tokenize("Senior Python engineer, Docker and Node.js");

        let m = matcher(SkillMatchMode::Tokens);
        let hits = m.find_hits("", &tokens);

        assert!(hits.contains(&"python".to_string()));
        assert!(hits.contains(&"docker".to_string()));
        assert!(hits.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_hits_are_distinct_and_in_dictionary_order() {
        let m = matcher(SkillMatchMode::Text);
        let hits = m.find_hits("python docker python aws docker", &[]);

        let expected: Vec<&str> = vec!["python", "aws", "docker"];
        assert_eq!(hits, expected);
    }

    #[test]
    fn test_score_saturates() {
        let m = matcher(SkillMatchMode::Text);
        assert_eq!(m.score(5, 10), 0.5);
        assert_eq!(m.score(10, 10), 1.0);
        assert_eq!(m.score(25, 10), 1.0);
        assert_eq!(m.score(0, 10), 0.0);
    }

    #[test]
    fn test_extra_skills_extend_dictionary() {
        let m = SkillsMatcher::new(SkillMatchMode::Text, &["Elixir".to_string()]).unwrap();
        let hits = m.find_hits("Backend services in Elixir", &[]);
        assert!(hits.contains(&"elixir".to_string()));
    }
}
