//! Resume analysis engine

pub mod text;
pub mod vocabulary;
pub mod personal_info;
pub mod keyword_matcher;
pub mod sections;
pub mod section_presence;
pub mod formatting;
pub mod suggestions;
pub mod analyzer;
