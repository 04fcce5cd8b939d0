//! Resume ATS scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, ResumeAtsError};
pub use config::Config;
pub use processing::analyzer::{analyze_resume, ResumeAnalysisResult, ResumeAnalyzer, SectionScores};
