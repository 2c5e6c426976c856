//! Score fusion and per-resume result assembly

use crate::config::{ProcessingConfig, ScoringConfig};
use crate::processing::metadata::EducationLevel;
use serde::{Deserialize, Serialize};

/// Per-resume output record. Serialized field names match the original
/// shortlisting API wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub filename: String,
    /// Bounded fused score in [0, 1].
    pub score: f32,
    /// Up to 8 distinct matched terms, overlapping keywords before skill
    /// hits.
    pub evidence: Vec<String>,
    /// Literal matched duration substring, e.g. "5+ years".
    pub experience: Option<String>,
    pub education: Option<EducationLevel>,
    pub snippet: String,
    /// Diagnostic note attached when very little text was extracted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub char_count: usize,
}

/// Combines the three component scores with fixed weights and assembles
/// the evidence list.
pub struct ScoreFuser {
    scoring: ScoringConfig,
    evidence_limit: usize,
    evidence_per_source: usize,
}

impl ScoreFuser {
    pub fn new(scoring: ScoringConfig, processing: &ProcessingConfig) -> Self {
        Self {
            scoring,
            evidence_limit: processing.evidence_limit,
            evidence_per_source: processing.evidence_per_source,
        }
    }

    /// Linear fusion, clamped to 1.0 so the invariant holds even if the
    /// configured weights sum above one.
    pub fn fuse(&self, overlap_ratio: f32, cosine: f32, skill_score: f32) -> f32 {
        let score = self.scoring.overlap_weight * overlap_ratio
            + self.scoring.cosine_weight * cosine
            + self.scoring.skills_weight * skill_score;
        score.min(1.0)
    }

    /// Union of the leading overlap keywords and the leading skill hits,
    /// keywords first, de-duplicated, truncated to the evidence limit.
    pub fn build_evidence(&self, overlap: &[String], skill_hits: &[String]) -> Vec<String> {
        let mut evidence: Vec<String> = Vec::with_capacity(self.evidence_limit);

        let candidates = overlap
            .iter()
            .take(self.evidence_per_source)
            .chain(skill_hits.iter().take(self.evidence_per_source));

        for term in candidates {
            if evidence.len() == self.evidence_limit {
                break;
            }
            if !evidence.contains(term) {
                evidence.push(term.clone());
            }
        }

        evidence
    }
}
