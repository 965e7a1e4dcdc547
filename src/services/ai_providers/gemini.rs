use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::GEMINI_BASE_URL;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    generation_config: GeminiGenerationConfig,
}

impl GeminiProvider {
    pub fn new(api_key: String, ai_config: &AiConfig) -> Self {
        Self {
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            client: Client::new(),
            model: ai_config.model.clone(),
            generation_config: GeminiGenerationConfig {
                temperature: Some(ai_config.temperature),
                top_p: Some(ai_config.top_p),
                top_k: Some(ai_config.top_k),
                max_output_tokens: Some(ai_config.max_output_tokens),
                candidate_count: Some(1),
            },
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn get_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: Some(self.generation_config.clone()),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn map_status_error(status: reqwest::StatusCode, error_text: String) -> AiProviderError {
        match status.as_u16() {
            400 => AiProviderError::ApiError(format!("Bad request: {}", error_text)),
            401 => AiProviderError::AuthenticationError(error_text),
            403 => AiProviderError::ApiError(format!("Forbidden: {}", error_text)),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
        }
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, AiProviderError> {
        log::debug!("📦 Request model: {}", self.model);

        let response = self.client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.get_request(prompt))
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::warn!("❌ Gemini API Error Response: {}", error_text);
            return Err(Self::map_status_error(status, error_text));
        }

        let body: GeminiResponse = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.without_url().to_string()))?;

        body.text().ok_or(AiProviderError::EmptyResponse)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_gemini_field_names() {
        let provider = GeminiProvider::new("key".to_string(), &AiConfig::default());
        let json = serde_json::to_value(provider.get_request("hello")).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 800);
        assert_eq!(json["generationConfig"]["topK"], 20);
    }

    #[test]
    fn endpoint_names_model_but_not_key() {
        let provider = GeminiProvider::new("secret".to_string(), &AiConfig::default())
            .with_base_url("http://localhost:9".to_string());
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn network_errors_do_not_reveal_the_key() {
        let provider = GeminiProvider::new("SUPERSECRETKEY".to_string(), &AiConfig::default())
            .with_base_url("http://127.0.0.1:9".to_string());

        let err = provider.generate("hi").await.unwrap_err();
        assert!(matches!(err, AiProviderError::NetworkError(_)));
        assert!(!err.to_string().contains("SUPERSECRETKEY"), "{}", err);
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let body: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"summary\":"},{"text":"\"ok\"}"}]},"finishReason":"STOP"}]}"#,
        ).unwrap();
        assert_eq!(body.text().as_deref(), Some(r#"{"summary":"ok"}"#));
    }

    #[test]
    fn blank_response_has_no_text() {
        let body: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(body.text().is_none());
    }

    #[test]
    fn status_errors_are_classified() {
        let err = GeminiProvider::map_status_error(reqwest::StatusCode::UNAUTHORIZED, "bad key".to_string());
        assert!(matches!(err, AiProviderError::AuthenticationError(_)));
    }
}
