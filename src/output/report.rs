//! Shortlist report structures

use crate::processing::document::DocumentProfile;
use crate::processing::scorer::ScoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one shortlisting run produced, ready for formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistReport {
    pub job: JobSummary,
    /// Ranked results, best first.
    pub results: Vec<ScoreResult>,
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub char_count: usize,
    pub keyword_count: usize,
}

impl ShortlistReport {
    pub fn new(jd_text: &str, jd: &DocumentProfile, results: Vec<ScoreResult>, elapsed_ms: u128) -> Self {
        Self {
            job: JobSummary {
                char_count: jd_text.chars().count(),
                keyword_count: jd.keyword_set.len(),
            },
            results,
            generated_at: Utc::now(),
            processing_time_ms: elapsed_ms,
        }
    }
}
