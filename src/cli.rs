//! CLI interface for the job pilot

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-pilot")]
#[command(about = "Resume parsing, job matching, and resume tailoring toolkit")]
#[command(
    long_about = "Parse resumes into structured records, synthesize ranked job matches from search preferences, and tailor resume documents to target jobs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume into a structured record
    Parse {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Show experience and education details
        #[arg(short, long)]
        detailed: bool,

        /// Persist the parsed record under this key
        #[arg(short, long)]
        save: Option<String>,
    },

    /// Generate ranked job matches for a resume
    Match {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Desired job title
        #[arg(short, long)]
        title: String,

        /// Desired location ("Any" randomizes)
        #[arg(short, long, default_value = "Any")]
        location: String,

        /// Job type (informational)
        #[arg(short, long, default_value = "fulltime")]
        job_type: String,

        /// Minimum salary preference
        #[arg(long, default_value_t = 0)]
        salary_min: u64,

        /// Maximum salary preference
        #[arg(long, default_value_t = 0)]
        salary_max: u64,

        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: console, json (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Show descriptions and URLs per job
        #[arg(short, long)]
        detailed: bool,

        /// Persist the generated job list under this key
        #[arg(short, long)]
        save: Option<String>,
    },

    /// Tailor a resume document to a target job
    Tailor {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target job title
        #[arg(short, long)]
        title: String,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show configuration
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
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
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
