//! Batch orchestration: score every resume against one job description

use crate::config::Config;
use crate::error::{Result, ShortlistError};
use crate::processing::document::{DocumentProfile, ExtractedDocument};
use crate::processing::metadata::MetadataExtractor;
use crate::processing::scorer::{ScoreFuser, ScoreResult};
use crate::processing::similarity;
use crate::processing::skills::SkillsMatcher;
use crate::processing::text_processor::TextProcessor;
use log::{debug, info};

pub struct ShortlistEngine {
    config: Config,
    text_processor: TextProcessor,
    skills_matcher: SkillsMatcher,
    metadata: MetadataExtractor,
    fuser: ScoreFuser,
}

impl ShortlistEngine {
    pub fn new(config: Config) -> Result<Self> {
        let text_processor = TextProcessor::new(config.processing.min_keyword_length);
        let skills_matcher = SkillsMatcher::new(
            config.processing.skill_match_mode,
            &config.processing.extra_skills,
        )?;
        let fuser = ScoreFuser::new(config.scoring.clone(), &config.processing);

        Ok(Self {
            config,
            text_processor,
            skills_matcher,
            metadata: MetadataExtractor::new(),
            fuser,
        })
    }

    /// Derived lexical structures for arbitrary text, used by callers that
    /// need the JD profile for reporting.
    pub fn profile(&self, text: &str) -> DocumentProfile {
        self.text_processor.profile(text)
    }

    /// Score every resume against the job description and return the
    /// ranked list, best first. Ties keep submission order.
    pub fn shortlist(
        &self,
        jd_text: &str,
        resumes: &[ExtractedDocument],
    ) -> Result<Vec<ScoreResult>> {
        if jd_text.trim().is_empty() {
            return Err(ShortlistError::InvalidInput(
                "Missing job description".to_string(),
            ));
        }
        if resumes.is_empty() {
            return Err(ShortlistError::InvalidInput(
                "No resumes supplied".to_string(),
            ));
        }

        let jd = self.text_processor.profile(jd_text);
        info!(
            "Scoring {} resume(s) against a JD with {} distinct keywords",
            resumes.len(),
            jd.keyword_set.len()
        );

        let mut results: Vec<ScoreResult> = resumes
            .iter()
            .map(|doc| self.score_resume(&jd, doc))
            .collect();

        // Stable sort: equal scores keep submission order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(results)
    }

    /// Run the full pipeline for a single resume. Pure given the extracted
    /// text; no cross-resume state.
    pub fn score_resume(&self, jd: &DocumentProfile, doc: &ExtractedDocument) -> ScoreResult {
        let profile = self.text_processor.profile(&doc.text);

        let overlap = similarity::overlapping_keywords(jd, &profile);
        let overlap_ratio = similarity::overlap_ratio(jd, overlap.len());
        let cosine = similarity::cosine_similarity(&jd.bag, &profile.bag);

        let skill_hits = self.skills_matcher.find_hits(&doc.text, &profile.tokens);
        let skill_score = self
            .skills_matcher
            .score(skill_hits.len(), self.config.scoring.skill_saturation);

        let score = self.fuser.fuse(overlap_ratio, cosine, skill_score);
        let evidence = self.fuser.build_evidence(&overlap, &skill_hits);

        debug!(
            "{}: overlap {:.3}, cosine {:.3}, skills {:.3} -> {:.3}",
            doc.filename, overlap_ratio, cosine, skill_score, score
        );

        ScoreResult {
            filename: doc.filename.clone(),
            score,
            evidence,
            experience: self.metadata.experience(&doc.text),
            education: self.metadata.education(&doc.text),
            snippet: self.metadata.snippet(
                &doc.text,
                &jd.keywords,
                self.config.processing.snippet_before,
                self.config.processing.snippet_after,
                self.config.processing.fallback_snippet_length,
            ),
            note: self.low_text_note(doc),
            char_count: doc.char_count,
        }
    }

    fn low_text_note(&self, doc: &ExtractedDocument) -> Option<String> {
        if doc.char_count >= self.config.processing.low_text_threshold {
            return None;
        }

        let note = if doc.filename.to_lowercase().ends_with(".pdf") {
            "Very little text extracted; this may be a scanned or image-based PDF."
        } else {
            "Very little text extracted from this file."
        };
        Some(note.to_string())
    }
}
