//! Section segmentation: pulls education, experience and project entries out
//! of a resume, one contiguous block of lines per entry.

use crate::error::{Result, ResumeAtsError};
use crate::processing::text::{split_lines, to_lower, trim};
use crate::processing::vocabulary::{EDUCATION_HEADERS, EXPERIENCE_HEADERS, PROJECT_HEADERS, SECTION_KEYWORDS};
use aho_corasick::AhoCorasick;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Education,
    Experience,
    Projects,
}

impl SectionKind {
    pub fn header_keywords(self) -> &'static [&'static str] {
        match self {
            SectionKind::Education => EDUCATION_HEADERS,
            SectionKind::Experience => EXPERIENCE_HEADERS,
            SectionKind::Projects => PROJECT_HEADERS,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SectionKind::Education => write!(f, "Education"),
            SectionKind::Experience => write!(f, "Experience"),
            SectionKind::Projects => write!(f, "Projects"),
        }
    }
}

/// A set of lowercase keywords matched as substrings of a folded line.
struct KeywordSet {
    matcher: AhoCorasick,
}

impl KeywordSet {
    fn new(keywords: &[&str]) -> Result<Self> {
        let matcher = AhoCorasick::new(keywords)
            .map_err(|e| ResumeAtsError::Processing(format!("Failed to build keyword matcher: {}", e)))?;
        Ok(Self { matcher })
    }

    fn matches(&self, lower_line: &str) -> bool {
        self.matcher.is_match(lower_line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Inside,
}

/// Line-oriented scanner for one section type.
///
/// A line containing a header keyword opens (or continues) the section and is
/// kept. Inside the section, a blank line closes the current entry but stays
/// inside, and a line containing a foreign keyword closes the entry and leaves
/// the section without being kept.
pub struct SectionSegmenter {
    kind: SectionKind,
    headers: KeywordSet,
    foreign: KeywordSet,
}

impl SectionSegmenter {
    /// Segmenter for `kind` using the shared section vocabulary as the
    /// foreign set.
    pub fn new(kind: SectionKind) -> Result<Self> {
        Self::with_keywords(kind, kind.header_keywords(), SECTION_KEYWORDS)
    }

    pub fn with_keywords(kind: SectionKind, headers: &[&str], foreign: &[&str]) -> Result<Self> {
        Ok(Self {
            kind,
            headers: KeywordSet::new(headers)?,
            foreign: KeywordSet::new(foreign)?,
        })
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut entries = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut state = State::Outside;

        for line in split_lines(text) {
            let trimmed = trim(line);
            let lower = to_lower(trimmed);

            if self.headers.matches(&lower) {
                current.push(trimmed);
                state = State::Inside;
                continue;
            }

            if state == State::Outside {
                continue;
            }

            if self.foreign.matches(&lower) {
                flush(&mut current, &mut entries);
                state = State::Outside;
            } else if trimmed.is_empty() {
                flush(&mut current, &mut entries);
            } else {
                current.push(trimmed);
            }
        }
        flush(&mut current, &mut entries);

        debug!("{} section: {} entries", self.kind, entries.len());
        entries
    }
}

fn flush(current: &mut Vec<&str>, entries: &mut Vec<String>) {
    if !current.is_empty() {
        entries.push(current.join(" "));
        current.clear();
    }
}
