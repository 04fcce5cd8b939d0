//! Structural formatting heuristics

use crate::error::Result;
use crate::processing::text::{is_blank, split_lines, trim};
use crate::processing::vocabulary::{
    BULLET_GLYPHS, CONTACT_FORMAT_PENALTY, MIN_RESUME_LENGTH, NO_BULLETS_PENALTY, NO_HEADERS_PENALTY,
    SHORT_RESUME_PENALTY, SPACING_PENALTY,
};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingCheckResult {
    /// 100 minus fired penalties, never below 0.
    pub score: i32,
    /// One message per failed check, in check order.
    pub deductions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattingIssue {
    TooShort,
    NoSectionHeaders,
    NoBulletPoints,
    InconsistentSpacing,
    ContactInfo,
}

impl FormattingIssue {
    pub fn penalty(self) -> i32 {
        match self {
            FormattingIssue::TooShort => SHORT_RESUME_PENALTY,
            FormattingIssue::NoSectionHeaders => NO_HEADERS_PENALTY,
            FormattingIssue::NoBulletPoints => NO_BULLETS_PENALTY,
            FormattingIssue::InconsistentSpacing => SPACING_PENALTY,
            FormattingIssue::ContactInfo => CONTACT_FORMAT_PENALTY,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FormattingIssue::TooShort => "Resume is too short",
            FormattingIssue::NoSectionHeaders => "No clear section headers found",
            FormattingIssue::NoBulletPoints => "No bullet points found for listing details",
            FormattingIssue::InconsistentSpacing => "Inconsistent spacing between sections",
            FormattingIssue::ContactInfo => "Missing or improperly formatted contact information",
        }
    }
}

pub struct FormattingScorer {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
}

impl FormattingScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email_regex: Regex::new(r"\b[\w.-]+@[\w.-]+\.\w+\b")?,
            phone_regex: Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b")?,
            linkedin_regex: Regex::new(r"linkedin\.com/\w+")?,
        })
    }

    pub fn check(&self, text: &str) -> FormattingCheckResult {
        let issues = self.issues(text);
        let penalty: i32 = issues.iter().map(|issue| issue.penalty()).sum();
        let score = (100 - penalty).max(0);

        debug!("Formatting score {} with {} deductions", score, issues.len());
        FormattingCheckResult {
            score,
            deductions: issues.iter().map(|issue| issue.message().to_string()).collect(),
        }
    }

    /// Failed checks in the fixed check order.
    pub fn issues(&self, text: &str) -> Vec<FormattingIssue> {
        let lines = split_lines(text);
        let mut issues = Vec::new();

        if text.len() < MIN_RESUME_LENGTH {
            issues.push(FormattingIssue::TooShort);
        }
        if !lines.iter().any(|line| is_header_line(line)) {
            issues.push(FormattingIssue::NoSectionHeaders);
        }
        if !lines.iter().any(|line| is_bullet_line(line)) {
            issues.push(FormattingIssue::NoBulletPoints);
        }
        if lines.windows(2).any(|pair| is_blank(pair[0]) && is_blank(pair[1])) {
            issues.push(FormattingIssue::InconsistentSpacing);
        }
        if !self.has_contact_info(text) {
            issues.push(FormattingIssue::ContactInfo);
        }
        issues
    }

    fn has_contact_info(&self, text: &str) -> bool {
        self.email_regex.is_match(text) || self.phone_regex.is_match(text) || self.linkedin_regex.is_match(text)
    }
}

/// A non-blank line with no lowercase letters, e.g. "WORK EXPERIENCE:".
fn is_header_line(line: &str) -> bool {
    let trimmed = trim(line);
    !trimmed.is_empty() && trimmed.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

fn is_bullet_line(line: &str) -> bool {
    trim(line)
        .graphemes(true)
        .next()
        .map_or(false, |first| BULLET_GLYPHS.contains(&first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> FormattingScorer {
        FormattingScorer::new().unwrap()
    }

    fn well_formatted() -> String {
        let mut text = String::from("Jane Doe\njane@example.com | 555-123-4567\n\nEXPERIENCE\n");
        for i in 0..8 {
            text.push_str(&format!("- Developed service number {} handling billing and reporting\n", i));
        }
        text
    }

    #[test]
    fn test_well_formatted_resume_scores_hundred() {
        let result = scorer().check(&well_formatted());
        assert_eq!(result.score, 100);
        assert!(result.deductions.is_empty());
    }

    #[test]
    fn test_empty_text_deductions() {
        let result = scorer().check("");
        assert_eq!(result.score, 15);
        assert_eq!(
            result.deductions,
            vec![
                "Resume is too short",
                "No clear section headers found",
                "No bullet points found for listing details",
                "Missing or improperly formatted contact information",
            ]
        );
    }

    #[test]
    fn test_all_five_deductions_floor_at_zero() {
        let result = scorer().check("lowercase only\n\n\nmore text");
        assert_eq!(result.deductions.len(), 5);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_deductions_keep_check_order() {
        let mut text = well_formatted().replace("EXPERIENCE", "Experience");
        text.push_str("\n\n");
        text.push_str("trailing");
        let issues = scorer().issues(&text);
        assert_eq!(issues, vec![FormattingIssue::NoSectionHeaders, FormattingIssue::InconsistentSpacing]);
        assert_eq!(scorer().check(&text).score, 65);
    }

    #[test]
    fn test_unicode_bullets_are_detected() {
        assert!(is_bullet_line("  • Built a cache"));
        assert!(is_bullet_line("→ Led migration"));
        assert!(is_bullet_line("*Starred"));
        assert!(!is_bullet_line("Built – a cache"));
        assert!(!is_bullet_line("   "));
    }

    #[test]
    fn test_header_line_detection() {
        assert!(is_header_line("WORK EXPERIENCE:"));
        assert!(is_header_line("2019 - 2021"));
        assert!(is_header_line("ÉDUCATION"));
        assert!(!is_header_line("Education"));
        assert!(!is_header_line(""));
    }

    #[test]
    fn test_contact_patterns() {
        let s = scorer();
        assert!(s.has_contact_info("reach me at a@b.com"));
        assert!(s.has_contact_info("555.123.4567"));
        assert!(s.has_contact_info("linkedin.com/in"));
        assert!(!s.has_contact_info("no contact here"));
    }

    #[test]
    fn test_trailing_newline_is_not_a_blank_pair() {
        let text = format!("{}\n", well_formatted());
        // "...\n" + "\n" ends in one empty line, not two
        assert!(!scorer().issues(&text).contains(&FormattingIssue::InconsistentSpacing));
    }
}
