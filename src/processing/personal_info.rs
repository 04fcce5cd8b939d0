//! Contact details and name extraction

use crate::error::Result;
use crate::processing::text::{split_lines, trim};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Unknown";

/// Contact fields found in a resume. Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub codeforces: String,
}

pub struct PersonalInfoExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    github_regex: Regex,
    codeforces_regex: Regex,
}

impl PersonalInfoExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email_regex: Regex::new(r"[\w.-]+@[\w.-]+\.\w+")?,
            phone_regex: Regex::new(r"(\+\d{1,3}[-.]?)?\s*\(?\d{3}\)?[-.]?\s*\d{3}[-.]?\s*\d{4}")?,
            linkedin_regex: Regex::new(r"linkedin\.com/in/[\w-]+")?,
            github_regex: Regex::new(r"github\.com/[\w-]+")?,
            codeforces_regex: Regex::new(r"codeforces\.com/profile/[\w-]+")?,
        })
    }

    pub fn extract(&self, text: &str) -> PersonalInfo {
        PersonalInfo {
            name: Self::guess_name(text),
            email: first_match(&self.email_regex, text),
            phone: trim(&first_match(&self.phone_regex, text)).to_string(),
            linkedin: first_match(&self.linkedin_regex, text),
            github: first_match(&self.github_regex, text),
            codeforces: first_match(&self.codeforces_regex, text),
        }
    }

    /// The first non-blank line is assumed to be the candidate's name.
    fn guess_name(text: &str) -> String {
        split_lines(text)
            .into_iter()
            .map(trim)
            .find(|line| !line.is_empty())
            .unwrap_or(UNKNOWN_NAME)
            .to_string()
    }
}

fn first_match(regex: &Regex, text: &str) -> String {
    regex
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
