//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Text,
    /// A document format that must be converted to text before analysis.
    Document(String),
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => FileType::Text,
            "pdf" | "docx" | "doc" | "md" | "markdown" | "rtf" | "odt" => FileType::Document(ext.to_lowercase()),
            _ => FileType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_text() {
        assert_eq!(FileType::from_extension("TXT"), FileType::Text);
        assert_eq!(FileType::from_extension("text"), FileType::Text);
    }

    #[test]
    fn test_detects_documents() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Document("pdf".to_string()));
        assert_eq!(FileType::from_extension("xyz"), FileType::Unknown);
    }
}
