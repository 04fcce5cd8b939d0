//! CLI interface for the resume ATS scorer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(about = "Score a plain-text resume the way an Applicant Tracking System would")]
#[command(long_about = "Check a resume against a job's required skills and get an ATS score, per-area sub-scores and suggestions")]
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
    /// Analyze a resume against required skills
    Analyze {
        /// Path to the resume text file (TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Comma-separated required skills
        #[arg(short, long)]
        skills: Option<String>,

        /// File with one required skill per line
        #[arg(long)]
        skills_file: Option<PathBuf>,

        /// Suggest adding a GPA when the education section lacks one
        #[arg(long)]
        require_gpa: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Include sub-scores, skills and section entries
        #[arg(short, long)]
        detailed: bool,
    },

    /// Analyze the built-in sample resume
    Demo {
        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show or change configuration
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

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "output.format")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.trim().to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}
