//! Text normalization primitives shared by every analysis component

/// Case-fold used for all keyword comparisons.
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Strip leading and trailing spaces, tabs, carriage returns and line feeds.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Split on `sep` with line-reading semantics: empty tokens between
/// consecutive separators are kept, a single trailing empty token is not,
/// and an empty input yields no tokens.
pub fn split(s: &str, sep: char) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut tokens: Vec<&str> = s.split(sep).collect();
    if s.ends_with(sep) {
        tokens.pop();
    }
    tokens
}

/// Split a document into lines. A trailing newline does not produce a
/// trailing empty line; `\r` left by CRLF endings is removed by `trim`.
pub fn split_lines(s: &str) -> Vec<&str> {
    split(s, '\n')
}

/// True when the line is empty once trimmed.
pub fn is_blank(s: &str) -> bool {
    trim(s).is_empty()
}
