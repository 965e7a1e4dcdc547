use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// A text-in, text-out language model backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiProviderError>;

    fn name(&self) -> &str;
}
