//! Resume shortlister: rank resumes against a job description

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ShortlistError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::{formatter_for, OutputFormatter};
use output::report::ShortlistReport;
use processing::analyzer::ShortlistEngine;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Score {
            job,
            jd_text,
            resumes,
            output,
            detailed,
            match_mode,
        } => {
            let output_format =
                cli::parse_output_format(&output).map_err(ShortlistError::InvalidInput)?;

            if let Some(mode) = match_mode {
                config.processing.skill_match_mode =
                    cli::parse_match_mode(&mode).map_err(ShortlistError::InvalidInput)?;
            }

            let manager = InputManager::new();

            // The JD can be pasted text or a file run through the same
            // extraction cascade as the resumes.
            let jd_text = match (jd_text, job) {
                (Some(text), _) => text,
                (None, Some(path)) => {
                    let file = manager.load(&path).await?;
                    manager.extract_text(&file).text
                }
                (None, None) => {
                    return Err(ShortlistError::InvalidInput(
                        "Missing job description: supply --job or --jd-text".to_string(),
                    ));
                }
            };

            info!("Loading {} resume file(s)", resumes.len());
            let started = Instant::now();
            let documents = manager.load_batch(&resumes).await?;

            let engine = ShortlistEngine::new(config.clone())?;
            let results = engine.shortlist(&jd_text, &documents)?;

            let report = ShortlistReport::new(
                &jd_text,
                &engine.profile(&jd_text),
                results,
                started.elapsed().as_millis(),
            );

            let formatter = formatter_for(output_format, config.output.color_output, detailed);
            println!("{}", formatter.format_report(&report)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Scoring weights:");
                println!("  Overlap: {:.2}", config.scoring.overlap_weight);
                println!("  Cosine:  {:.2}", config.scoring.cosine_weight);
                println!("  Skills:  {:.2}", config.scoring.skills_weight);
                println!("Skill saturation: {} hits", config.scoring.skill_saturation);
                println!(
                    "Skill match mode: {:?}",
                    config.processing.skill_match_mode
                );
                println!(
                    "Minimum keyword length: {}",
                    config.processing.min_keyword_length
                );
                println!(
                    "Low-text threshold: {} characters",
                    config.processing.low_text_threshold
                );
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
