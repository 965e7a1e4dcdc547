use serde_json::Value;
use crate::config::constants::{sleep_duration_millis, EMPTY_CODE_MESSAGE, GENERIC_TRANSPORT_ERROR, PROGRESS_STATUSES, STATUS_CYCLE_INTERVAL_MS};
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::request_outcome::RequestOutcome;
use crate::errors::ReviewerResult;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::result_parser::parse_analysis;
use crate::structs::api::code_submission::CodeSubmission;
use crate::traits::review_transport::ReviewTransport;

/// Submit-and-wait flow for one analysis: local validation, progress
/// indicator, a single request, then the outcome. Nothing is retried.
pub struct RequestLifecycle<T: ReviewTransport> {
    transport: T,
    show_progress: bool,
}

impl<T: ReviewTransport> RequestLifecycle<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, show_progress: true }
    }

    /// Disables the terminal spinner.
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub async fn submit(&self, kind: AnalysisKind, submission: &CodeSubmission) -> RequestOutcome {
        if submission.non_empty_code().is_none() {
            return RequestOutcome::Rejected(EMPTY_CODE_MESSAGE.to_string());
        }

        let mut progress = self.show_progress.then(|| {
            AnimatedLogger::new(format!("{}:", kind.label()))
                .with_statuses(PROGRESS_STATUSES, sleep_duration_millis(STATUS_CYCLE_INTERVAL_MS))
        });
        if let Some(logger) = progress.as_mut() {
            logger.start();
        }

        let outcome = Self::interpret(kind, self.transport.submit(kind, submission).await);

        if let Some(logger) = progress.as_mut() {
            match &outcome {
                RequestOutcome::Completed { .. } => logger.stop(&format!("{} complete", kind.label())).await,
                RequestOutcome::ServerError(message) | RequestOutcome::TransportError(message) => {
                    logger.error(message).await;
                }
                RequestOutcome::Rejected(_) => {}
            }
        }

        outcome
    }

    /// Maps a server reply onto the outcome taxonomy.
    pub fn interpret(kind: AnalysisKind, response: ReviewerResult<Value>) -> RequestOutcome {
        let body = match response {
            Ok(body) => body,
            Err(e) => {
                log::debug!("Transport failure: {}", e);
                return RequestOutcome::TransportError(GENERIC_TRANSPORT_ERROR.to_string());
            }
        };

        if !body.get("success").and_then(Value::as_bool).unwrap_or(false) {
            let message = body.get("error")
                .and_then(Value::as_str)
                .unwrap_or("Analysis failed")
                .to_string();
            return RequestOutcome::ServerError(message);
        }

        let text = body.get(kind.result_field()).and_then(Value::as_str).unwrap_or_default();
        RequestOutcome::Completed {
            analysis: parse_analysis(text),
            review_id: body.get("review_id").and_then(Value::as_i64),
            processing_time: body.get("processing_time").and_then(Value::as_f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::enums::parsed_analysis::ParsedAnalysis;
    use crate::errors::ReviewerError;
    use crate::traits::review_transport::MockReviewTransport;

    fn submission(code: &str) -> CodeSubmission {
        CodeSubmission {
            code: Some(code.to_string()),
            ..CodeSubmission::default()
        }
    }

    #[tokio::test]
    async fn whitespace_code_is_rejected_without_a_request() {
        let mut transport = MockReviewTransport::new();
        transport.expect_submit().times(0);

        let outcome = RequestLifecycle::new(transport).quiet()
            .submit(AnalysisKind::Review, &submission("   \n\t"))
            .await;
        assert_eq!(outcome, RequestOutcome::Rejected("Please enter some code to analyze".to_string()));
    }

    #[tokio::test]
    async fn exactly_one_request_is_sent() {
        let mut transport = MockReviewTransport::new();
        transport.expect_submit()
            .times(1)
            .returning(|_, _| Ok(json!({"success": true, "review": "{\"summary\":\"ok\"}", "review_id": 3, "processing_time": 1.25})));

        let outcome = RequestLifecycle::new(transport).quiet()
            .submit(AnalysisKind::Review, &submission("x = 1"))
            .await;

        match outcome {
            RequestOutcome::Completed { analysis, review_id, processing_time } => {
                assert!(analysis.is_decoded());
                assert_eq!(review_id, Some(3));
                assert_eq!(processing_time, Some(1.25));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn transport_failure_shows_generic_message() {
        let mut transport = MockReviewTransport::new();
        transport.expect_submit()
            .times(1)
            .returning(|_, _| Err(ReviewerError::network_error("POST", None, None, "connection refused")));

        let outcome = RequestLifecycle::new(transport).quiet()
            .submit(AnalysisKind::Debug, &submission("x"))
            .await;
        assert_eq!(outcome, RequestOutcome::TransportError(GENERIC_TRANSPORT_ERROR.to_string()));
    }

    #[test]
    fn server_error_message_is_passed_through() {
        let outcome = RequestLifecycle::<MockReviewTransport>::interpret(
            AnalysisKind::Review,
            Ok(json!({"success": false, "error": "Login required"})),
        );
        assert_eq!(outcome, RequestOutcome::ServerError("Login required".to_string()));
    }

    #[test]
    fn debug_result_field_is_read() {
        let outcome = RequestLifecycle::<MockReviewTransport>::interpret(
            AnalysisKind::Debug,
            Ok(json!({"success": true, "debug_result": "plain words"})),
        );
        assert_eq!(outcome, RequestOutcome::Completed {
            analysis: ParsedAnalysis::Raw("plain words".to_string()),
            review_id: None,
            processing_time: None,
        });
    }
}
