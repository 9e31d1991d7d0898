use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// A text completion backend used for code review.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Sends `prompt` as a single user turn and returns the raw completion text.
    async fn generate(&self, prompt: String) -> Result<String, AiProviderError>;
}
