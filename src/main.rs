//! Content crew - main entry point
//!
//! Loads the agent and task rosters, runs the four-task pipeline against the
//! configured model provider, normalizes the terminal output, and writes the
//! article and social posts to disk.

use clap::Parser;
use contentcrew::config::CrewConfig;
use contentcrew::content::{normalize, DefaultPosts};
use contentcrew::crew::ContentCrew;
use contentcrew::llm::{OpenAiCompatConfig, OpenAiCompatProvider};
use contentcrew::observability::init_default_logging;
use contentcrew::output::OutputWriter;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};

/// Default research subject when none is given on the command line
const DEFAULT_SUBJECT: &str = "What is the best AI model in each category?";

/// Environment variable holding the model provider API key
const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

/// Multi-agent content creation pipeline
#[derive(Parser)]
#[command(name = "contentcrew")]
#[command(about = "Research a subject, draft an article, and produce social posts")]
#[command(version)]
struct Cli {
    /// Subject to research and write about
    #[arg(short, long, default_value = DEFAULT_SUBJECT)]
    subject: String,

    /// Directory holding agents.yaml and tasks.yaml
    #[arg(long, value_name = "DIR", default_value = "config")]
    config_dir: PathBuf,

    /// Base directory for run output folders
    #[arg(long, value_name = "DIR", default_value = "output")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_default_logging();

    info!(subject = %cli.subject, "Using subject");

    info!("Loading configurations...");
    let config = match CrewConfig::load(&cli.config_dir, &cli.subject) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    info!("Setting up LLM provider...");
    let provider = match build_provider() {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to set up LLM provider: {e}");
            process::exit(1);
        }
    };

    let crew = ContentCrew::new(config, provider);

    info!("Starting content creation process...");
    let raw = match crew.kickoff().await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Content creation process failed: {e}");
            process::exit(1);
        }
    };
    info!("Content creation completed successfully");

    let defaults = DefaultPosts::for_subject(&cli.subject);
    let normalized = normalize(raw, &defaults);

    let writer = OutputWriter::new(&cli.output_dir);
    match writer.save(&normalized.bundle, &cli.subject) {
        Ok(paths) => {
            info!(folder = %paths.folder.display(), "Output saved");
        }
        Err(e) => {
            // Dump the shape that was written for debugging before aborting
            warn!(outcome = ?normalized.outcome, posts = normalized.bundle.social_media_posts.len(), "Result shape at failure");
            error!("Error saving output: {e}");
            process::exit(1);
        }
    }
}

/// Build the model provider from the environment
fn build_provider() -> Result<Box<dyn contentcrew::llm::LlmProvider>, contentcrew::llm::LlmError> {
    let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
        contentcrew::llm::LlmError::NotConfigured(format!(
            "Environment variable {API_KEY_ENV} is not set"
        ))
    })?;

    let provider = OpenAiCompatProvider::new(OpenAiCompatConfig {
        api_key,
        ..Default::default()
    })?;

    Ok(Box::new(provider))
}
