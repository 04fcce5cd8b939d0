//! Resume analysis engine: runs every component over one resume and
//! aggregates their outputs into the final ATS score.

use crate::error::Result;
use crate::processing::formatting::FormattingScorer;
use crate::processing::keyword_matcher::{KeywordMatchResult, KeywordMatcher};
use crate::processing::personal_info::{PersonalInfo, PersonalInfoExtractor};
use crate::processing::section_presence::SectionPresenceScorer;
use crate::processing::sections::{SectionKind, SectionSegmenter};
use crate::processing::suggestions::{SuggestionEngine, SuggestionGroups};
use crate::processing::vocabulary::{
    CONTACT_WEIGHT, EDUCATION_WEIGHT, EXPERIENCE_WEIGHT, FORMAT_WEIGHT, SKILLS_WEIGHT, SUGGESTION_PENALTY,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Per-area sub-scores feeding the final ATS score.
///
/// Only `format` is floored at 0; the suggestion-derived scores are
/// `100 - 25 * suggestions` without clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub contact: i32,
    pub skills: i32,
    pub experience: i32,
    pub education: i32,
    pub format: i32,
}

impl SectionScores {
    /// Weighted sum with each term rounded on its own before summing.
    pub fn ats_score(&self) -> i32 {
        weighted(self.contact, CONTACT_WEIGHT)
            + weighted(self.skills, SKILLS_WEIGHT)
            + weighted(self.experience, EXPERIENCE_WEIGHT)
            + weighted(self.education, EDUCATION_WEIGHT)
            + weighted(self.format, FORMAT_WEIGHT)
    }

    /// (name, score) pairs in reporting order.
    pub fn entries(&self) -> [(&'static str, i32); 5] {
        [
            ("contact", self.contact),
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("format", self.format),
        ]
    }
}

fn weighted(score: i32, weight: f64) -> i32 {
    (score as f64 * weight).round() as i32
}

fn score_from_suggestions(suggestions: &[String]) -> i32 {
    100 - SUGGESTION_PENALTY * suggestions.len() as i32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysisResult {
    pub personal_info: PersonalInfo,
    pub ats_score: i32,
    pub keyword_match: KeywordMatchResult,
    /// Section vocabulary presence, 0-100.
    pub section_score: u32,
    pub format_score: i32,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub suggestions: Vec<String>,
    pub section_scores: SectionScores,
}

/// Holds the compiled patterns of every component. Build once and reuse;
/// analysis itself is a pure function of its inputs.
pub struct ResumeAnalyzer {
    personal_info: PersonalInfoExtractor,
    keyword_matcher: KeywordMatcher,
    education: SectionSegmenter,
    experience: SectionSegmenter,
    projects: SectionSegmenter,
    presence: SectionPresenceScorer,
    formatting: FormattingScorer,
    suggestions: SuggestionEngine,
}

impl ResumeAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            personal_info: PersonalInfoExtractor::new()?,
            keyword_matcher: KeywordMatcher::new(),
            education: SectionSegmenter::new(SectionKind::Education)?,
            experience: SectionSegmenter::new(SectionKind::Experience)?,
            projects: SectionSegmenter::new(SectionKind::Projects)?,
            presence: SectionPresenceScorer::new(),
            formatting: FormattingScorer::new()?,
            suggestions: SuggestionEngine::new()?,
        })
    }

    pub fn analyze_resume(&self, text: &str, required_skills: &[String], require_gpa: bool) -> ResumeAnalysisResult {
        debug!(
            "Analyzing resume: {} bytes, {} required skills, GPA required: {}",
            text.len(),
            required_skills.len(),
            require_gpa
        );

        let personal_info = self.personal_info.extract(text);
        let keyword_match = self.keyword_matcher.match_skills(text, required_skills);
        let education = self.education.segment(text);
        let experience = self.experience.segment(text);
        let projects = self.projects.segment(text);
        let section_score = self.presence.score(text);
        let formatting = self.formatting.check(text);

        let groups = SuggestionGroups {
            contact: self.suggestions.contact(&personal_info),
            skills: self.suggestions.skills(&keyword_match),
            experience: self.suggestions.experience(&experience),
            education: self.suggestions.education(&education, require_gpa),
            formatting: self.suggestions.formatting(&formatting),
        };

        let section_scores = SectionScores {
            contact: score_from_suggestions(&groups.contact),
            skills: keyword_match.score.round() as i32,
            experience: score_from_suggestions(&groups.experience),
            education: score_from_suggestions(&groups.education),
            format: formatting.score,
        };
        let ats_score = section_scores.ats_score();
        debug!("ATS score {} from {:?}", ats_score, section_scores);

        ResumeAnalysisResult {
            personal_info,
            ats_score,
            keyword_match,
            section_score,
            format_score: formatting.score,
            education,
            experience,
            projects,
            suggestions: groups.into_suggestions(),
            section_scores,
        }
    }
}

/// Analyze with a process-wide analyzer built on first use.
pub fn analyze_resume(text: &str, required_skills: &[String], require_gpa: bool) -> Result<ResumeAnalysisResult> {
    static ANALYZER: OnceLock<ResumeAnalyzer> = OnceLock::new();

    let analyzer = match ANALYZER.get() {
        Some(analyzer) => analyzer,
        None => {
            let built = ResumeAnalyzer::new()?;
            ANALYZER.get_or_init(|| built)
        }
    };
    Ok(analyzer.analyze_resume(text, required_skills, require_gpa))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::suggestions::{MISSING_SKILLS_HEADER, WELL_OPTIMIZED};

    fn analyzer() -> ResumeAnalyzer {
        ResumeAnalyzer::new().unwrap()
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    const STRONG_RESUME: &str = "Jane Doe
Email: jane.doe@example.com
Phone: 555-123-4567
LinkedIn: linkedin.com/in/janedoe

EXPERIENCE
Senior Engineer, Acme Corp (2019 - 2023)
- Developed a Rust ingestion service handling 2M events per day
- Improved query latency by 40% using PostgreSQL indexes

EDUCATION
Bachelor of Technology in Computer Science, 2018
CGPA 8.7

SKILLS
Rust, PostgreSQL, Docker, Kubernetes
";

    #[test]
    fn test_empty_input() {
        let result = analyzer().analyze_resume("", &[], false);

        assert_eq!(result.personal_info.name, "Unknown");
        assert_eq!(result.section_score, 0);
        assert_eq!(result.keyword_match.score, 0.0);
        assert!(result.suggestions.contains(&"Resume is too short".to_string()));
        assert_eq!(
            result.section_scores,
            SectionScores { contact: 25, skills: 0, experience: 75, education: 75, format: 15 }
        );
        // 3 + 0 + 19 + 8 + 3
        assert_eq!(result.ats_score, 33);
    }

    #[test]
    fn test_missing_skill_suggestions() {
        let result = analyzer().analyze_resume("email: a@b.com", &skills(&["SQL"]), false);

        assert_eq!(result.keyword_match.missing_skills, skills(&["SQL"]));
        assert_eq!(result.section_scores.skills, 0);
        let header = result.suggestions.iter().position(|s| s == MISSING_SKILLS_HEADER).unwrap();
        assert_eq!(result.suggestions[header + 1], "SQL");
    }

    #[test]
    fn test_complete_experience_has_no_suggestions() {
        let text = "EXPERIENCE\n• Developed the billing system at Initech in 2019\n";
        let result = analyzer().analyze_resume(text, &[], false);

        assert_eq!(result.experience.len(), 1);
        assert_eq!(result.section_scores.experience, 100);
        assert!(!result.suggestions.iter().any(|s| s.contains("work experience")
            || s.contains("bullet points")
            || s.contains("action verbs")));
    }

    #[test]
    fn test_strong_resume() {
        let required = skills(&["Rust", "PostgreSQL", "Docker", "Kafka"]);
        let result = analyzer().analyze_resume(STRONG_RESUME, &required, true);

        assert_eq!(result.personal_info.name, "Jane Doe");
        assert_eq!(result.personal_info.email, "jane.doe@example.com");
        assert_eq!(result.personal_info.linkedin, "linkedin.com/in/janedoe");
        assert_eq!(result.keyword_match.missing_skills, skills(&["Kafka"]));
        assert_eq!(result.experience.len(), 1);
        assert!(result.experience[0].starts_with("EXPERIENCE Senior Engineer"));
        assert_eq!(result.education.len(), 1);
        assert!(result.education[0].ends_with("CGPA 8.7"));
        assert_eq!(
            result.section_scores,
            SectionScores { contact: 100, skills: 75, experience: 100, education: 100, format: 100 }
        );
        // 10 + 26 + 25 + 10 + 20
        assert_eq!(result.ats_score, 91);
        assert_eq!(result.suggestions, vec![MISSING_SKILLS_HEADER, "Kafka"]);
    }

    #[test]
    fn test_well_optimized_message() {
        let required = skills(&["Rust", "Docker"]);
        let result = analyzer().analyze_resume(STRONG_RESUME, &required, true);
        assert_eq!(result.suggestions, vec![WELL_OPTIMIZED]);
        assert_eq!(result.ats_score, 100);
    }

    #[test]
    fn test_suggestion_groups_keep_order() {
        let text = "jane\n\n\nEDUCATION\nState University\n";
        let result = analyzer().analyze_resume(text, &skills(&["Go"]), false);

        let position = |needle: &str| result.suggestions.iter().position(|s| s == needle).unwrap();
        assert!(position("Add your email address") < position(MISSING_SKILLS_HEADER));
        assert!(position(MISSING_SKILLS_HEADER) < position("Add your work experience section"));
        assert!(position("Add your work experience section") < position("Include graduation dates"));
        assert!(position("Include graduation dates") < position("Resume is too short"));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let required = skills(&["Rust", "Kafka"]);
        let a = analyzer();
        assert_eq!(
            a.analyze_resume(STRONG_RESUME, &required, false),
            a.analyze_resume(STRONG_RESUME, &required, false)
        );
    }

    #[test]
    fn test_sub_scores_are_not_clamped() {
        // Three experience suggestions leave 25 rather than being floored or capped.
        let result = analyzer().analyze_resume("EXPERIENCE\nSoftware engineer at Acme\n", &[], false);
        assert_eq!(result.section_scores.experience, 25);
        assert_eq!(score_from_suggestions(&skills(&["a", "b", "c", "d", "e"])), -25);
    }

    #[test]
    fn test_terms_round_independently() {
        // 75 * 0.1 = 7.5 and 50 * 0.35 = 17.5 both round up on their own.
        let scores = SectionScores { contact: 100, skills: 50, experience: 25, education: 75, format: 100 };
        assert_eq!(scores.ats_score(), 62);
    }

    #[test]
    fn test_shared_analyzer() {
        let required = skills(&["Rust"]);
        let shared = analyze_resume(STRONG_RESUME, &required, false).unwrap();
        assert_eq!(shared, analyzer().analyze_resume(STRONG_RESUME, &required, false));
    }
}
