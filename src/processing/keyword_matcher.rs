//! Required-skill matching and scoring

use crate::processing::text::{split, to_lower};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    /// Share of required skills found, 0-100.
    pub score: f64,
    /// Found skills, in the order of the required list.
    pub found_skills: Vec<String>,
    /// Skills not found, in the order of the required list.
    pub missing_skills: Vec<String>,
}

/// Matches required skills by case-insensitive substring containment.
///
/// There is no tokenization or word-boundary check, so a short skill such as
/// "go" also matches inside "good".
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordMatcher;

impl KeywordMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn match_skills(&self, text: &str, required_skills: &[String]) -> KeywordMatchResult {
        let lower_text = to_lower(text);
        let mut result = KeywordMatchResult::default();

        for skill in required_skills {
            let skill_lower = to_lower(skill);
            if lower_text.contains(&skill_lower) || Self::found_in_sentences(&lower_text, &skill_lower) {
                result.found_skills.push(skill.clone());
            } else {
                result.missing_skills.push(skill.clone());
            }
        }

        result.score = if required_skills.is_empty() {
            0.0
        } else {
            result.found_skills.len() as f64 / required_skills.len() as f64 * 100.0
        };

        debug!(
            "Keyword match: {}/{} required skills found",
            result.found_skills.len(),
            required_skills.len()
        );
        result
    }

    /// Fallback search over period-delimited segments of the folded text.
    fn found_in_sentences(lower_text: &str, skill_lower: &str) -> bool {
        split(lower_text, '.')
            .iter()
            .any(|sentence| sentence.contains(skill_lower))
    }
}
