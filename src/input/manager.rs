//! Input manager for reading resume and skill files

use crate::error::{Result, ResumeAtsError};
use crate::input::file_detector::FileType;
use crate::input::{parse_skill_list, parse_skills_file};
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
}

/// Resume text and required skills gathered for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    pub text: String,
    pub required_skills: Vec<String>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self { cache: HashMap::new() }
    }

    /// Read resume text from a plain-text file.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached_text) = self.cache.get(&path_str) {
            info!("Using cached text for: {}", path.display());
            return Ok(cached_text.clone());
        }

        if !path.exists() {
            return Err(ResumeAtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match self.detect_file_type(path) {
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                fs::read_to_string(path).await?
            }
            FileType::Document(ext) => {
                return Err(ResumeAtsError::UnsupportedFormat(format!(
                    "{} files must be converted to plain text first: {}",
                    ext,
                    path.display()
                )));
            }
            FileType::Unknown => {
                return Err(ResumeAtsError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        self.cache.insert(path_str, text.clone());

        Ok(text)
    }

    /// Read a required-skills file, one skill per line.
    pub async fn read_skills(&self, path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            ResumeAtsError::InvalidInput(format!("Cannot read skills file {}: {}", path.display(), e))
        })?;
        Ok(parse_skills_file(&content))
    }

    /// Read the resume and assemble the required skills.
    ///
    /// `skills` (comma list) and `skills_file` are combined; when neither is
    /// given, `default_skills` applies.
    pub async fn gather(
        &mut self,
        resume: &Path,
        skills: Option<&str>,
        skills_file: Option<&Path>,
        default_skills: &[String],
    ) -> Result<AnalysisInput> {
        let text = self.extract_text(resume).await?;
        info!("Read {} characters from {}", text.chars().count(), resume.display());

        let required_skills = if skills.is_none() && skills_file.is_none() {
            default_skills.to_vec()
        } else {
            let mut required = skills.map(parse_skill_list).unwrap_or_default();
            if let Some(path) = skills_file {
                required.extend(self.read_skills(path).await?);
            }
            required
        };

        Ok(AnalysisInput { text, required_skills })
    }

    fn detect_file_type(&self, path: &Path) -> FileType {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(FileType::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
