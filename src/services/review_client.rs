use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::enums::analysis_kind::AnalysisKind;
use crate::errors::{ReviewerError, ReviewerResult};
use crate::structs::api::auth_request::LoginRequest;
use crate::structs::api::auth_response::AuthResponse;
use crate::structs::api::code_submission::CodeSubmission;
use crate::structs::review::ReviewSummary;
use crate::traits::review_transport::ReviewTransport;

#[derive(serde::Deserialize)]
struct ReviewListResponse {
    success: bool,
    #[serde(default)]
    reviews: Vec<ReviewSummary>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for a running review server. Keeps the session cookie
/// between calls.
#[derive(Clone)]
pub struct HttpReviewClient {
    base_url: String,
    client: Client,
}

impl HttpReviewClient {
    pub fn new(base_url: &str) -> ReviewerResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ReviewerError::network_error("client setup", None, None, &e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, username: &str, password: &str) -> ReviewerResult<()> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: AuthResponse = self.client
            .post(self.url("/login"))
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ReviewerError::auth_error(&response.message));
        }

        log::debug!("🔑 Logged in as {}", username);
        Ok(())
    }

    pub async fn history(&self) -> ReviewerResult<Vec<ReviewSummary>> {
        let response: ReviewListResponse = self.client
            .get(self.url("/api/reviews"))
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ReviewerError::auth_error(
                response.error.as_deref().unwrap_or("Request failed"),
            ));
        }
        Ok(response.reviews)
    }
}

#[async_trait]
impl ReviewTransport for HttpReviewClient {
    async fn submit(&self, kind: AnalysisKind, submission: &CodeSubmission) -> ReviewerResult<Value> {
        let response = self.client
            .post(self.url(kind.endpoint()))
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<Value>().await.map_err(|e| {
            ReviewerError::network_error("read response", Some(kind.endpoint()), Some(status.as_u16()), &e.to_string())
        })?;
        Ok(body)
    }
}
