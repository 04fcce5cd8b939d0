//! Input processing module
//! Reads resume text and required-skill lists for the analyzer

pub mod file_detector;
pub mod manager;
pub mod sample;

pub use manager::{AnalysisInput, InputManager};

/// Split a comma-separated skill list, trimming entries and dropping blanks.
pub fn parse_skill_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// One skill per line; blank lines and `#` comments are skipped.
pub fn parse_skills_file(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
