use std::sync::Arc;
use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

#[async_trait]
pub trait AiProvider: Send + Sync {

    /// One `generateContent`-style call: returns the raw text of the first
    /// candidate, before any fence stripping.
    async fn generate_content(&self, model: String, prompt: String) -> Result<String, AiProviderError>;
}

/// Builds a provider once the per-request credential is known.
pub trait ProviderFactory: Send + Sync {
    fn create(&self, api_key: String) -> Arc<dyn AiProvider>;
}
