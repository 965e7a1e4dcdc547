use crate::enums::analysis_kind::AnalysisKind;

/// Which section layout a decoded result is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Review,
    Debug,
}

impl From<AnalysisKind> for RenderMode {
    fn from(kind: AnalysisKind) -> Self {
        match kind {
            AnalysisKind::Debug => RenderMode::Debug,
            AnalysisKind::Review | AnalysisKind::Comprehensive => RenderMode::Review,
        }
    }
}
