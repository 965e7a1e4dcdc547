use crate::structs::analysis_result::AnalysisResult;

/// Outcome of reparsing stored analysis text.
///
/// The raw text stays the source of truth; `Decoded` is only a view of it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedAnalysis {
    Decoded(AnalysisResult),
    Raw(String),
}

impl ParsedAnalysis {
    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded(_))
    }
}
