//! Human-readable improvement suggestions, grouped by resume area

use crate::error::Result;
use crate::processing::formatting::FormattingCheckResult;
use crate::processing::keyword_matcher::KeywordMatchResult;
use crate::processing::personal_info::PersonalInfo;
use crate::processing::text::to_lower;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const WELL_OPTIMIZED: &str = "Your resume is well-optimized for ATS systems";
pub const MISSING_SKILLS_HEADER: &str = "Missing skills are:";

/// Suggestions per area. Concatenated in field order to form the final list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionGroups {
    pub contact: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub formatting: Vec<String>,
}

impl SuggestionGroups {
    pub fn is_empty(&self) -> bool {
        self.contact.is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.formatting.is_empty()
    }

    /// Flatten in contact, skills, experience, education, formatting order,
    /// falling back to a single "all good" message.
    pub fn into_suggestions(self) -> Vec<String> {
        if self.is_empty() {
            return vec![WELL_OPTIMIZED.to_string()];
        }
        let mut all = self.contact;
        all.extend(self.skills);
        all.extend(self.experience);
        all.extend(self.education);
        all.extend(self.formatting);
        all
    }
}

pub struct SuggestionEngine {
    year_regex: Regex,
    bullet_regex: Regex,
    action_verb_regex: Regex,
    degree_regex: Regex,
    gpa_regex: Regex,
}

impl SuggestionEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            year_regex: Regex::new(r"\b(19|20)\d{2}\b")?,
            bullet_regex: Regex::new(r"[•\-*]")?,
            action_verb_regex: Regex::new(r"\b(developed|managed|created|implemented|designed|led|improved)\b")?,
            degree_regex: Regex::new(r"\b(bachelor|master|phd|b\.|m\.|diploma)\b")?,
            gpa_regex: Regex::new(r"\b(gpa|cgpa|grade|percentage)\b")?,
        })
    }

    pub fn contact(&self, info: &PersonalInfo) -> Vec<String> {
        let mut suggestions = Vec::new();
        if info.email.is_empty() {
            suggestions.push("Add your email address".to_string());
        }
        if info.phone.is_empty() {
            suggestions.push("Add your phone number".to_string());
        }
        if info.linkedin.is_empty() {
            suggestions.push("Add your LinkedIn profile URL".to_string());
        }
        suggestions
    }

    pub fn skills(&self, keyword_match: &KeywordMatchResult) -> Vec<String> {
        if keyword_match.missing_skills.is_empty() {
            return Vec::new();
        }
        std::iter::once(MISSING_SKILLS_HEADER.to_string())
            .chain(keyword_match.missing_skills.iter().cloned())
            .collect()
    }

    pub fn experience(&self, entries: &[String]) -> Vec<String> {
        if entries.is_empty() {
            return vec!["Add your work experience section".to_string()];
        }

        let has_dates = entries.iter().any(|e| self.year_regex.is_match(e));
        let has_bullets = entries.iter().any(|e| self.bullet_regex.is_match(e));
        let has_action_verbs = entries.iter().any(|e| self.action_verb_regex.is_match(&to_lower(e)));

        let mut suggestions = Vec::new();
        if !has_dates {
            suggestions.push("Include dates for each work experience".to_string());
        }
        if !has_bullets {
            suggestions.push("Use bullet points to list your achievements and responsibilities".to_string());
        }
        if !has_action_verbs {
            suggestions.push("Start bullet points with strong action verbs".to_string());
        }
        suggestions
    }

    pub fn education(&self, entries: &[String], require_gpa: bool) -> Vec<String> {
        if entries.is_empty() {
            return vec!["Add your educational background".to_string()];
        }

        let has_dates = entries.iter().any(|e| self.year_regex.is_match(e));
        let has_degree = entries.iter().any(|e| self.degree_regex.is_match(&to_lower(e)));
        let has_gpa = entries.iter().any(|e| self.gpa_regex.is_match(&to_lower(e)));

        let mut suggestions = Vec::new();
        if !has_dates {
            suggestions.push("Include graduation dates".to_string());
        }
        if !has_degree {
            suggestions.push("Specify your degree type".to_string());
        }
        if require_gpa && !has_gpa {
            suggestions.push("Include your CGPA if it's above 7.0".to_string());
        }
        suggestions
    }

    /// Formatting deductions are passed through verbatim.
    pub fn formatting(&self, formatting: &FormattingCheckResult) -> Vec<String> {
        if formatting.score < 100 {
            formatting.deductions.clone()
        } else {
            Vec::new()
        }
    }
}
