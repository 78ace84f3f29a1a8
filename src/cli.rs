//! CLI interface for the resume tailor

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-tailor")]
#[command(about = "AI-powered resume tailoring tool")]
#[command(long_about = "Analyze a PDF resume against a job description with a hosted language model and generate an enhanced, job-specific resume")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Resume and job description inputs shared by the analysis commands
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to resume file (PDF, TXT, MD)
    #[arg(short, long)]
    pub resume: PathBuf,

    /// Path to job description file (TXT, MD)
    #[arg(short, long, conflicts_with = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description passed inline
    #[arg(long)]
    pub job_text: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Save the analysis session for a later `generate`
        #[arg(short, long)]
        session: Option<PathBuf>,

        /// Also show extracted contact details and sections
        #[arg(short, long)]
        detailed: bool,
    },

    /// Generate the enhanced resume from a saved analysis session
    Generate {
        /// Session file written by `analyze --session`
        #[arg(short, long)]
        session: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze and generate the enhanced resume in one run
    Tailor {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Also show extracted contact details and sections
        #[arg(short, long)]
        detailed: bool,
    },

    /// Send a test prompt to verify the API key and model
    CheckApi,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file (defaults to the configured file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: text, markdown, json
    #[arg(short, long)]
    pub format: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "text" | "txt" => Ok(OutputFormat::Text),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: text, markdown, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
