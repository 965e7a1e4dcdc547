use serde::{Deserialize, Serialize};
use crate::config::constants::{DEFAULT_LANGUAGE, DEFAULT_TITLE};

/// Request body shared by the review, debug and analyze endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeSubmission {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CodeSubmission {
    pub fn language_or_default(&self) -> String {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string()
    }

    pub fn title_or_default(&self) -> String {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string()
    }

    pub fn error_text(&self) -> Option<String> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
    }

    /// The submitted code if it has any non-whitespace content.
    pub fn non_empty_code(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.trim().is_empty())
    }
}
