//! CLI interface for the resume shortlister

use crate::config::{OutputFormat, SkillMatchMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-shortlist")]
#[command(about = "Rank resumes against a job description")]
#[command(
    long_about = "Score a batch of resumes (PDF, DOCX, TXT) against a job description using keyword overlap, term-frequency cosine similarity, and a fixed skills dictionary, and print a ranked shortlist with evidence."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score resumes against a job description
    Score {
        /// Path to the job description file (PDF, DOCX, TXT)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description pasted as text (alternative to --job)
        #[arg(long)]
        jd_text: Option<String>,

        /// Resume files to score (one or more)
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Include evidence snippets in console output
        #[arg(short, long)]
        detailed: bool,

        /// Skill matching mode: text, tokens
        #[arg(long)]
        match_mode: Option<String>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Parse and validate skill matching mode
pub fn parse_match_mode(mode: &str) -> Result<SkillMatchMode, String> {
    match mode.to_lowercase().as_str() {
        "text" => Ok(SkillMatchMode::Text),
        "tokens" => Ok(SkillMatchMode::Tokens),
        _ => Err(format!(
            "Invalid skill match mode: {}. Supported: text, tokens",
            mode
        )),
    }
}
