//! Output formatters: console with colors, JSON for machine consumption

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ShortlistReport;
use crate::processing::scorer::ScoreResult;
use colored::Colorize;

/// Formats a finished report for one output target.
pub trait OutputFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn score_label(&self, score: f32) -> String {
        let label = format!("{:.1}%", score * 100.0);
        if !self.use_colors {
            return label;
        }
        if score >= 0.7 {
            label.green().bold().to_string()
        } else if score >= 0.4 {
            label.yellow().to_string()
        } else {
            label.red().to_string()
        }
    }

    fn format_result(&self, rank: usize, result: &ScoreResult) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{:>3}. {}  {}\n",
            rank,
            result.filename,
            self.score_label(result.score)
        ));

        if !result.evidence.is_empty() {
            out.push_str(&format!("     Evidence: {}\n", result.evidence.join(", ")));
        }

        let experience = result.experience.as_deref().unwrap_or("—");
        let education = result
            .education
            .map(|e| e.to_string())
            .unwrap_or_else(|| "—".to_string());
        out.push_str(&format!(
            "     Experience: {}  Education: {}  Characters: {}\n",
            experience, education, result.char_count
        ));

        if let Some(note) = &result.note {
            let note_line = format!("     Note: {}", note);
            if self.use_colors {
                out.push_str(&format!("{}\n", note_line.yellow()));
            } else {
                out.push_str(&format!("{}\n", note_line));
            }
        }

        if self.detailed && !result.snippet.is_empty() {
            out.push_str(&format!("     Snippet: {}\n", result.snippet));
        }

        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "Shortlist — {} resume(s) against a JD with {} keyword(s)\n",
            report.results.len(),
            report.job.keyword_count
        ));
        out.push_str(&format!(
            "Processed in {} ms\n\n",
            report.processing_time_ms
        ));

        for (i, result) in report.results.iter().enumerate() {
            out.push_str(&self.format_result(i + 1, result));
            out.push('\n');
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Pick the formatter matching the requested output format.
pub fn formatter_for(
    format: OutputFormat,
    use_colors: bool,
    detailed: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::JobSummary;
    use chrono::Utc;

    fn sample_report() -> ShortlistReport {
        ShortlistReport {
            job: JobSummary {
                char_count: 64,
                keyword_count: 5,
            },
            results: vec![ScoreResult {
                filename: "a.txt".to_string(),
                score: 0.82,
                evidence: vec!["python".to_string(), "aws".to_string()],
                experience: Some("5 years".to_string()),
                education: None,
                snippet: "Senior engineer, 5 years Python".to_string(),
                note: None,
                char_count: 31,
            }],
            generated_at: Utc::now(),
            processing_time_ms: 12,
        }
    }

    #[test]
    fn test_console_output_lists_results() {
        let formatter = ConsoleFormatter::new(false, false);
        let out = formatter.format_report(&sample_report()).unwrap();

        assert!(out.contains("a.txt"));
        assert!(out.contains("82.0%"));
        assert!(out.contains("python, aws"));
        assert!(out.contains("Experience: 5 years"));
        assert!(out.contains("Education: —"));
    }

    #[test]
    fn test_json_output_uses_wire_names() {
        let formatter = JsonFormatter::new(false);
        let out = formatter.format_report(&sample_report()).unwrap();

        assert!(out.contains("\"charCount\":31"));
        assert!(out.contains("\"filename\":\"a.txt\""));
        // Absent note is omitted entirely.
        assert!(!out.contains("\"note\""));
    }
}
