use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::{request_timeout, GEMINI_API_BASE_URL};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::{AiProvider, ProviderFactory};

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    generation_config: Option<GeminiGenerationConfig>,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: GEMINI_API_BASE_URL.to_string(),
            client: Client::new(),
            generation_config: None,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_generation_config(mut self, generation_config: Option<GeminiGenerationConfig>) -> Self {
        self.generation_config = generation_config;
        self
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent?key={}", self.base_url, model, self.api_key)
    }

    fn get_request(&self, prompt: String) -> GeminiRequest {
        let mut request = GeminiRequest::from_prompt(prompt);
        request.generation_config = self.generation_config.clone();
        request
    }

    async fn make_request(&self, url: String, request_body: GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.without_url().to_string()))
    }

    fn error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(|message| message.as_str())
                    .map(|message| message.to_string())
            })
            .unwrap_or_else(|| body.trim().to_string())
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate_content(&self, model: String, prompt: String) -> Result<String, AiProviderError> {
        log::debug!("📦 Request model: {}", model);

        let url = self.endpoint(&model);
        let request_body = self.get_request(prompt);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(AiProviderError::ApiError {
                status: status.as_u16(),
                message: Self::error_message(&error_text),
            });
        }

        let envelope: GeminiResponse = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.without_url().to_string()))?;

        match envelope.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                log::warn!(
                    "Model {} returned no text (finish reason: {})",
                    model,
                    envelope.finish_reason().unwrap_or("unknown")
                );
                Err(AiProviderError::EmptyResponse)
            }
        }
    }
}

/// Shares one connection pool across requests; only the key changes.
#[derive(Clone)]
pub struct GeminiProviderFactory {
    base_url: String,
    client: Client,
    generation_config: Option<GeminiGenerationConfig>,
}

impl GeminiProviderFactory {
    pub fn from_config(ai_config: &AiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(seconds) = ai_config.request_timeout_secs {
            builder = builder.timeout(request_timeout(seconds));
        }

        let response_mime_type = ai_config
            .response_mime_type
            .as_deref()
            .map(str::trim)
            .filter(|mime| !mime.is_empty())
            .map(str::to_string);

        let generation_config = if ai_config.temperature.is_some()
            || ai_config.max_output_tokens.is_some()
            || response_mime_type.is_some()
        {
            Some(GeminiGenerationConfig {
                temperature: ai_config.temperature,
                max_output_tokens: ai_config.max_output_tokens,
                response_mime_type,
            })
        } else {
            None
        };

        Ok(Self {
            base_url: ai_config.base_url.clone(),
            client: builder.build()?,
            generation_config,
        })
    }
}

impl ProviderFactory for GeminiProviderFactory {
    fn create(&self, api_key: String) -> Arc<dyn AiProvider> {
        Arc::new(
            GeminiProvider::new(api_key)
                .with_base_url(self.base_url.clone())
                .with_client(self.client.clone())
                .with_generation_config(self.generation_config.clone()),
        )
    }
}
