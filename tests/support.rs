use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use serde_json::{json, Value};
use warp::http::Response;
use warp::hyper::body::Bytes;
use ai_code_reviewer::enums::ai_provider_error::AiProviderError;
use ai_code_reviewer::helpers::session_token::SessionSigner;
use ai_code_reviewer::services::code_analyzer::CodeAnalyzer;
use ai_code_reviewer::services::database::Database;
use ai_code_reviewer::structs::config::ai_config::AiConfig;
use ai_code_reviewer::traits::ai_provider::AiProvider;
use ai_code_reviewer::ui::app_state::AppState;

pub const REVIEW_JSON: &str = r#"{"overall_rating":7.5,"summary":"Decent","issues":["off-by-one"],"suggestions":[]}"#;

/// Answers every prompt with the same text, or fails if `reply` is `None`.
pub struct FakeProvider {
    reply: Option<String>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeProvider {
    pub fn replying(reply: &str) -> Self {
        Self { reply: Some(reply.to_string()), calls: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn failing() -> Self {
        Self { reply: None, calls: Arc::new(AtomicUsize::new(0)) }
    }
}

#[async_trait]
impl AiProvider for FakeProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or_else(|| AiProviderError::NetworkError("connection refused".to_string()))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub async fn app_state(provider: FakeProvider) -> Arc<AppState> {
    let db = Database::in_memory().await.expect("in-memory database");
    let analyzer = CodeAnalyzer::new(Some(Arc::new(provider)), AiConfig::default());
    AppState::new(db, analyzer, SessionSigner::new("integration-secret", 1), 1)
}

pub fn body_json(response: &Response<Bytes>) -> Value {
    serde_json::from_slice(response.body()).expect("JSON body")
}

pub fn body_text(response: &Response<Bytes>) -> String {
    String::from_utf8_lossy(response.body()).into_owned()
}

/// Registers and logs in `username`, returning the `Cookie` header value.
pub async fn login_cookie(state: &Arc<AppState>, username: &str) -> String {
    let filter = ai_code_reviewer::ui::routes::routes(Arc::clone(state));

    let response = warp::test::request()
        .method("POST")
        .path("/register")
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "correct horse",
        }))
        .reply(&filter)
        .await;
    assert_eq!(body_json(&response)["message"], "Registration successful");

    let response = warp::test::request()
        .method("POST")
        .path("/login")
        .json(&json!({ "username": username, "password": "correct horse" }))
        .reply(&filter)
        .await;
    assert_eq!(body_json(&response)["message"], "Login successful");

    let set_cookie = response.headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("session cookie");
    set_cookie.split(';').next().unwrap_or_default().to_string()
}
