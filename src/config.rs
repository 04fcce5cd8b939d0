//! Configuration management for the resume ATS scorer

use crate::error::{Result, ResumeAtsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Skills used when none are given on the command line.
    pub default_required_skills: Vec<String>,
    pub require_gpa: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                default_required_skills: Vec::new(),
                require_gpa: false,
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
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        Self::load_or_create(&Self::config_path())
    }

    /// Load from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeAtsError::Configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ResumeAtsError::Configuration(format!("Failed to parse config: {}", e)))
    }

    /// An explicit `--config` path must already exist; otherwise the
    /// default location is used.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ats")
            .join("config.toml")
    }

    /// Set a value by dotted key, e.g. `output.format` or `analysis.require_gpa`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "analysis.default_required_skills" => {
                self.analysis.default_required_skills = crate::input::parse_skill_list(value);
            }
            "analysis.require_gpa" => self.analysis.require_gpa = parse_bool(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value).map_err(ResumeAtsError::Configuration)?;
            }
            "output.detailed" => self.output.detailed = parse_bool(key, value)?,
            "output.color_output" => self.output.color_output = parse_bool(key, value)?,
            _ => {
                return Err(ResumeAtsError::Configuration(format!("Unknown configuration key: {}", key)));
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ResumeAtsError::Configuration(format!(
            "Invalid boolean for {}: {}",
            key, value
        ))),
    }
}
