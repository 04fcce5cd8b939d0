//! Output formatters for analysis results

use crate::config::OutputFormat;
use crate::error::{Result, ResumeAtsError};
use crate::processing::analyzer::ResumeAnalysisResult;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an analysis result
pub trait OutputFormatter {
    fn format_result(&self, result: &ResumeAnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for programmatic consumers
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter {
    detailed: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn score_badge(score: i32) -> (&'static str, Color) {
    match score {
        90..=i32::MAX => ("EXCELLENT", Color::Green),
        75..=89 => ("GOOD", Color::BrightGreen),
        60..=74 => ("FAIR", Color::Yellow),
        40..=59 => ("WEAK", Color::Red),
        _ => ("POOR", Color::BrightRed),
    }
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() {
        "(not found)"
    } else {
        value
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn format_list(&self, title: &str, items: &[String], color: Color) -> String {
        let mut output = self.format_header(title);
        if items.is_empty() {
            output.push_str("  (none)\n");
        }
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &ResumeAnalysisResult) -> Result<String> {
        let mut output = String::new();

        let (badge, color) = score_badge(result.ats_score);
        output.push_str(&format!(
            "ATS Score: {} {}\n",
            result.ats_score,
            self.colorize(&format!("[{}]", badge), color)
        ));

        let info = &result.personal_info;
        output.push_str(&format!("Name: {}\n", info.name));
        output.push_str(&format!("Email: {}\n", info.email));
        output.push_str(&format!("Phone: {}\n", info.phone));
        output.push_str(&format!("LinkedIn: {}\n", info.linkedin));

        if self.detailed {
            output.push_str(&format!("GitHub: {}\n", or_missing(&info.github)));
            output.push_str(&format!("Codeforces: {}\n", or_missing(&info.codeforces)));

            output.push_str(&self.format_header("Score Breakdown"));
            for (name, score) in result.section_scores.entries() {
                output.push_str(&format!("  {:<12} {:>4}\n", name, score));
            }
            output.push_str(&format!("  {:<12} {:>4}\n", "sections", result.section_score));

            output.push_str(&self.format_list("Matched Skills", &result.keyword_match.found_skills, Color::Green));
            output.push_str(&self.format_list("Missing Skills", &result.keyword_match.missing_skills, Color::Red));
            output.push_str(&self.format_list("Experience", &result.experience, Color::White));
            output.push_str(&self.format_list("Education", &result.education, Color::White));
            output.push_str(&self.format_list("Projects", &result.projects, Color::White));
        }

        output.push_str(&self.format_header("Suggestions:"));
        for suggestion in &result.suggestions {
            output.push_str(&format!("- {}\n", self.colorize(suggestion, Color::Yellow)));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &ResumeAnalysisResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }

    fn list(title: &str, items: &[String]) -> String {
        let mut output = format!("## {}\n\n", title);
        if items.is_empty() {
            output.push_str("_None_\n");
        }
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_result(&self, result: &ResumeAnalysisResult) -> Result<String> {
        let mut output = String::from("# Resume ATS Report\n\n");

        let (badge, _) = score_badge(result.ats_score);
        output.push_str(&format!("**ATS Score:** {} ({})\n\n", result.ats_score, badge));

        let info = &result.personal_info;
        output.push_str("## Contact\n\n");
        output.push_str("| Field | Value |\n|-------|-------|\n");
        output.push_str(&format!("| Name | {} |\n", info.name));
        output.push_str(&format!("| Email | {} |\n", or_missing(&info.email)));
        output.push_str(&format!("| Phone | {} |\n", or_missing(&info.phone)));
        output.push_str(&format!("| LinkedIn | {} |\n", or_missing(&info.linkedin)));
        output.push_str(&format!("| GitHub | {} |\n", or_missing(&info.github)));
        output.push_str(&format!("| Codeforces | {} |\n\n", or_missing(&info.codeforces)));

        output.push_str("## Scores\n\n| Area | Score |\n|------|-------|\n");
        for (name, score) in result.section_scores.entries() {
            output.push_str(&format!("| {} | {} |\n", name, score));
        }
        output.push_str(&format!("| sections | {} |\n\n", result.section_score));

        if self.detailed {
            output.push_str(&Self::list("Matched Skills", &result.keyword_match.found_skills));
            output.push_str(&Self::list("Missing Skills", &result.keyword_match.missing_skills));
            output.push_str(&Self::list("Experience", &result.experience));
            output.push_str(&Self::list("Education", &result.education));
            output.push_str(&Self::list("Projects", &result.projects));
        }

        output.push_str(&Self::list("Suggestions", &result.suggestions));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    fn formatters(&self) -> [&dyn OutputFormatter; 3] {
        let formatters: [&dyn OutputFormatter; 3] =
            [&self.console_formatter, &self.json_formatter, &self.markdown_formatter];
        formatters
    }

    pub fn generate_report(&self, result: &ResumeAnalysisResult, format: OutputFormat) -> Result<String> {
        let formatter = self
            .formatters()
            .into_iter()
            .find(|formatter| formatter.supports_format() == format)
            .ok_or_else(|| ResumeAtsError::OutputFormatting(format!("No formatter for {:?}", format)))?;
        formatter.format_result(result)
    }

    /// Render `result` and write it to `path`.
    pub fn save_report(&self, result: &ResumeAnalysisResult, format: OutputFormat, path: &Path) -> Result<()> {
        let content = self.generate_report(result, format)?;
        std::fs::write(path, content).map_err(|e| {
            ResumeAtsError::OutputFormatting(format!("Failed to write report to {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ResumeAnalyzer;

    fn sample_result() -> ResumeAnalysisResult {
        let text = "Jane Doe\nEmail: jane@example.com\n\nEXPERIENCE\n- Developed things in 2020\n";
        let skills = vec!["Rust".to_string()];
        ResumeAnalyzer::new().unwrap().analyze_resume(text, &skills, false)
    }

    #[test]
    fn test_console_plain_output() {
        let result = sample_result();
        let output = ConsoleFormatter::new(false, false).format_result(&result).unwrap();

        assert!(output.starts_with(&format!("ATS Score: {} ", result.ats_score)));
        assert!(output.contains("Name: Jane Doe"));
        assert!(output.contains("Email: jane@example.com"));
        assert!(output.contains("- Missing skills are:"));
        assert!(!output.contains("Score Breakdown"));
    }

    #[test]
    fn test_console_detailed_output() {
        let output = ConsoleFormatter::new(false, true).format_result(&sample_result()).unwrap();
        assert!(output.contains("Score Breakdown"));
        assert!(output.contains("Missing Skills"));
        assert!(output.contains("GitHub: (not found)"));
    }

    #[test]
    fn test_json_contains_full_result() {
        let result = sample_result();
        let json = JsonFormatter::new(false).format_result(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ats_score"], result.ats_score);
        assert_eq!(value["personal_info"]["name"], "Jane Doe");
        assert_eq!(value["section_scores"]["format"], result.section_scores.format);
        let parsed: ResumeAnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_markdown_sections() {
        let output = MarkdownFormatter::new(true).format_result(&sample_result()).unwrap();
        assert!(output.starts_with("# Resume ATS Report"));
        assert!(output.contains("| Name | Jane Doe |"));
        assert!(output.contains("## Suggestions"));
        assert!(output.contains("## Missing Skills\n\n- Rust"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true);
        let result = sample_result();
        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown] {
            assert!(!generator.generate_report(&result, format).unwrap().is_empty());
        }

        let json = generator.generate_report(&result, OutputFormat::Json).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
        let markdown = generator.generate_report(&result, OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with("# Resume ATS Report"));
        let console = generator.generate_report(&result, OutputFormat::Console).unwrap();
        assert!(console.starts_with("ATS Score:"));
    }
}
