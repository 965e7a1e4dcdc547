use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("Gemini API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("Empty response from AI")]
    EmptyResponse,
    #[error("AI request timed out after {0}s")]
    Timeout(u64),
}
