use crate::enums::parsed_analysis::ParsedAnalysis;

/// Terminal state of one submitted analysis request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Rejected locally, nothing was sent.
    Rejected(String),
    Completed {
        analysis: ParsedAnalysis,
        review_id: Option<i64>,
        processing_time: Option<f64>,
    },
    ServerError(String),
    TransportError(String),
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
