use serde::{Deserialize, Serialize};

/// The three analysis flavours the service can ask the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Review,
    Debug,
    Comprehensive,
}

impl AnalysisKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Review => "/api/review-code",
            Self::Debug => "/api/debug-code",
            Self::Comprehensive => "/api/analyze-code",
        }
    }

    /// Key of the analysis text in the endpoint's JSON response.
    pub fn result_field(&self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::Debug => "debug_result",
            Self::Comprehensive => "analysis",
        }
    }

    pub fn is_persisted(&self) -> bool {
        !matches!(self, Self::Debug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Review => "Code Review",
            Self::Debug => "Debug",
            Self::Comprehensive => "Comprehensive Analysis",
        }
    }
}
