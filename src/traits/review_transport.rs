use async_trait::async_trait;
use serde_json::Value;
use crate::enums::analysis_kind::AnalysisKind;
use crate::errors::ReviewerResult;
use crate::structs::api::code_submission::CodeSubmission;

/// Carries one analysis request to the review server.
///
/// `Ok` holds the decoded JSON body whatever the HTTP status was;
/// `Err` means no usable response arrived.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewTransport: Send + Sync {
    async fn submit(&self, kind: AnalysisKind, submission: &CodeSubmission) -> ReviewerResult<Value>;
}
