use serde::{Deserialize, Serialize};

/// Structured view of analysis text produced by the model.
///
/// Every field is optional: a response carrying only some of them still
/// decodes, and review and debug results share this one shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub overall_rating: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub issues: Option<Vec<String>>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
    #[serde(default)]
    pub security_notes: Option<Vec<String>>,
    #[serde(default)]
    pub performance_tips: Option<Vec<String>>,

    #[serde(default)]
    pub issue_explanation: Option<String>,
    #[serde(default)]
    pub fixed_code: Option<String>,
    #[serde(default)]
    pub fix_explanation: Option<String>,
    #[serde(default)]
    pub prevention_tips: Option<Vec<String>>,
}
