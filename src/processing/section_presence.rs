//! Scores how much of the expected resume vocabulary appears in the text

use crate::processing::text::to_lower;
use crate::processing::vocabulary::{PRESENCE_CATEGORIES, PRESENCE_CATEGORY_MAX};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPresence {
    pub category: String,
    pub found: usize,
    pub total: usize,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SectionPresenceScorer;

impl SectionPresenceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Total presence score, 0-100.
    pub fn score(&self, text: &str) -> u32 {
        self.breakdown(text).iter().map(|c| c.score).sum()
    }

    /// Per-category presence, each worth 0-25.
    pub fn breakdown(&self, text: &str) -> Vec<CategoryPresence> {
        let lower_text = to_lower(text);

        PRESENCE_CATEGORIES
            .iter()
            .map(|(category, keywords)| {
                let found = keywords.iter().filter(|k| lower_text.contains(*k)).count();
                let score = category_score(found, keywords.len());
                debug!("Presence of {}: {}/{} keywords, {} points", category, found, keywords.len(), score);
                CategoryPresence {
                    category: category.to_string(),
                    found,
                    total: keywords.len(),
                    score,
                }
            })
            .collect()
    }
}

fn category_score(found: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let max = PRESENCE_CATEGORY_MAX as f64;
    let scaled = (found as f64 / total as f64 * max).round() as u32;
    scaled.min(PRESENCE_CATEGORY_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = SectionPresenceScorer::new();
        assert_eq!(scorer.score(""), 0);
        assert!(scorer.breakdown("").iter().all(|c| c.score == 0));
    }

    #[test]
    fn test_full_vocabulary_scores_hundred() {
        let text = "Email Phone Address LinkedIn Education University College Degree Academic \
                    Experience Internship Work Position of Responsibility Skills Technologies Tools Expertise";
        assert_eq!(SectionPresenceScorer::new().score(text), 100);
    }

    #[test]
    fn test_partial_categories_round() {
        // contact 1/4 -> 6.25 -> 6, education 2/5 -> 10, skills 3/4 -> 18.75 -> 19
        let text = "email: x\nEDUCATION at some university\nskills, tools and expertise";
        let breakdown = SectionPresenceScorer::new().breakdown(text);

        let by_name = |name: &str| breakdown.iter().find(|c| c.category == name).unwrap().score;
        assert_eq!(by_name("contact"), 6);
        assert_eq!(by_name("education"), 10);
        assert_eq!(by_name("experience"), 0);
        assert_eq!(by_name("skills"), 19);
        assert_eq!(SectionPresenceScorer::new().score(text), 35);
    }

    #[test]
    fn test_category_scores_stay_in_range() {
        let text = "work experience internship email phone skills tools degree";
        for category in SectionPresenceScorer::new().breakdown(text) {
            assert!(category.score <= PRESENCE_CATEGORY_MAX);
        }
        assert!(SectionPresenceScorer::new().score(text) <= 100);
    }
}
