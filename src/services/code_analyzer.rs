use std::sync::Arc;
use crate::config::constants::{timeout_duration_secs, DEBUG_TRUNCATION_SUFFIX, REVIEW_TRUNCATION_SUFFIX};
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::analysis_kind::AnalysisKind;
use crate::helpers::prompt_generator::{generate_prompt, truncate_code};
use crate::prompts::fallback_responses::{comprehensive_fallback, debug_fallback, review_fallback};
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;
use crate::traits::ai_provider::AiProvider;

/// Text produced for one analysis request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub text: String,
    pub used_fallback: bool,
}

/// Builds prompts, calls the model once and substitutes a fixed fallback
/// document when the call does not produce text in time.
#[derive(Clone)]
pub struct CodeAnalyzer {
    provider: Option<Arc<dyn AiProvider>>,
    settings: AiConfig,
}

impl CodeAnalyzer {
    pub fn new(provider: Option<Arc<dyn AiProvider>>, settings: AiConfig) -> Self {
        Self { provider, settings }
    }

    pub fn from_config(config: &Config) -> Self {
        let provider = config.api_key().map(|api_key| {
            Arc::new(GeminiProvider::new(api_key, &config.ai)) as Arc<dyn AiProvider>
        });

        if provider.is_none() {
            log::warn!("⚠️ {} is not set, analyses will use fallback results", config.ai.api_key_env);
        }

        Self::new(provider, config.ai.clone())
    }

    /// Code as it will be prompted and stored.
    pub fn prepare_code(&self, kind: AnalysisKind, code: &str) -> String {
        match kind {
            AnalysisKind::Debug => truncate_code(code, self.settings.debug_code_limit, DEBUG_TRUNCATION_SUFFIX),
            AnalysisKind::Review | AnalysisKind::Comprehensive => {
                truncate_code(code, self.settings.review_code_limit, REVIEW_TRUNCATION_SUFFIX)
            }
        }
    }

    pub async fn analyze(&self, kind: AnalysisKind, code: &str, language: &str, error: Option<&str>) -> AnalysisOutcome {
        let prompt = generate_prompt(kind, code, language, error);

        match self.call_provider(kind, &prompt).await {
            Ok(text) => AnalysisOutcome { text, used_fallback: false },
            Err(e) => {
                log::warn!("⚠️ {} failed, using fallback result: {}", kind.label(), e);
                AnalysisOutcome {
                    text: Self::fallback(kind, language),
                    used_fallback: true,
                }
            }
        }
    }

    async fn call_provider(&self, kind: AnalysisKind, prompt: &str) -> Result<String, AiProviderError> {
        let provider = self.provider.as_ref()
            .ok_or_else(|| AiProviderError::AuthenticationError("no API key configured".to_string()))?;

        let seconds = self.timeout_secs(kind);
        log::debug!("🤖 Sending {} prompt to {} ({}s timeout)", kind.label(), provider.name(), seconds);
        let text = tokio::time::timeout(timeout_duration_secs(seconds), provider.generate(prompt))
            .await
            .map_err(|_| AiProviderError::Timeout(seconds))??;

        if text.trim().is_empty() {
            return Err(AiProviderError::EmptyResponse);
        }
        Ok(text)
    }

    fn timeout_secs(&self, kind: AnalysisKind) -> u64 {
        match kind {
            AnalysisKind::Debug => self.settings.debug_timeout_secs,
            AnalysisKind::Review | AnalysisKind::Comprehensive => self.settings.review_timeout_secs,
        }
    }

    fn fallback(kind: AnalysisKind, language: &str) -> String {
        match kind {
            AnalysisKind::Review => review_fallback(language),
            AnalysisKind::Debug => debug_fallback(),
            AnalysisKind::Comprehensive => comprehensive_fallback(language),
        }
    }
}
