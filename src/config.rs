//! Configuration management for the resume shortlister

use crate::error::{Result, ShortlistError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

/// Fixed fusion weights. These are design constants of the scoring model,
/// surfaced here so they are visible in one place rather than scattered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub overlap_weight: f32,
    pub cosine_weight: f32,
    pub skills_weight: f32,
    /// Number of skill hits at which the skill component saturates at 1.0.
    pub skill_saturation: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Minimum token length to count as a keyword.
    pub min_keyword_length: usize,
    /// Snippet window around the first matched keyword.
    pub snippet_before: usize,
    pub snippet_after: usize,
    /// Excerpt length when no JD keyword occurs in the resume.
    pub fallback_snippet_length: usize,
    /// Extracted character count below which a diagnostic note is attached.
    pub low_text_threshold: usize,
    pub evidence_limit: usize,
    /// Cap on keywords and on skills taken into the evidence union.
    pub evidence_per_source: usize,
    pub skill_match_mode: SkillMatchMode,
    /// Skills appended to the built-in dictionary.
    pub extra_skills: Vec<String>,
}

/// How skill dictionary entries are matched against a resume.
///
/// The tokenizer collapses everything outside `[a-z0-9+.#]` to spaces, so
/// multi-word entries like "github actions" can never survive as a single
/// token. `Text` scans the raw lower-cased text instead and is the default;
/// `Tokens` is the strict membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillMatchMode {
    Text,
    Tokens,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                overlap_weight: 0.50,
                cosine_weight: 0.35,
                skills_weight: 0.15,
                skill_saturation: 10,
            },
            processing: ProcessingConfig {
                min_keyword_length: 3,
                snippet_before: 80,
                snippet_after: 120,
                fallback_snippet_length: 200,
                low_text_threshold: 80,
                evidence_limit: 8,
                evidence_per_source: 6,
                skill_match_mode: SkillMatchMode::Text,
                extra_skills: Vec::new(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ShortlistError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ShortlistError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-shortlist")
            .join("config.toml")
    }
}
