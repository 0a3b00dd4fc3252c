//! Supported snippet languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of languages a snippet may declare.
///
/// The write path rejects anything outside this set; the classifier is more
/// forgiving and simply skips its language-specific tier for unknown values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Typescript,
    Python,
    Java,
    Csharp,
    Cpp,
    Php,
    Ruby,
    Go,
    Rust,
    Swift,
    Kotlin,
    Html,
    Css,
    Sql,
    Json,
    Yaml,
    Markdown,
    Plaintext,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 19] = [
        Language::Javascript,
        Language::Typescript,
        Language::Python,
        Language::Java,
        Language::Csharp,
        Language::Cpp,
        Language::Php,
        Language::Ruby,
        Language::Go,
        Language::Rust,
        Language::Swift,
        Language::Kotlin,
        Language::Html,
        Language::Css,
        Language::Sql,
        Language::Json,
        Language::Yaml,
        Language::Markdown,
        Language::Plaintext,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Csharp => "csharp",
            Language::Cpp => "cpp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Markdown => "markdown",
            Language::Plaintext => "plaintext",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Language::ALL
            .iter()
            .find(|l| l.as_str() == normalized)
            .copied()
            .ok_or_else(|| {
                format!(
                    "unsupported language: '{}'. Supported languages: {}",
                    s,
                    Language::ALL
                        .iter()
                        .map(|l| l.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
