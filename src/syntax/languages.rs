//! Language identification and detection
//!
//! Maps file extensions and short names to the three playground languages.

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    Html,
    Css,
    JavaScript,
}

impl LanguageId {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "html" | "htm" => LanguageId::Html,
            "css" => LanguageId::Css,
            "js" | "mjs" | "cjs" => LanguageId::JavaScript,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Parse a short language name as typed on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "html" | "markup" => Some(LanguageId::Html),
            "css" | "style" => Some(LanguageId::Css),
            "js" | "javascript" | "script" => Some(LanguageId::JavaScript),
            "text" | "plain" => Some(LanguageId::PlainText),
            _ => None,
        }
    }
}
