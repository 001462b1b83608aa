use std::sync::Arc;
use uuid::Uuid;
use warp::http::Method;
use crate::errors::{ProxyError, ProxyResult};
use crate::services::ai_providers::gemini::GeminiProviderFactory;
use crate::services::report_generator::ReportGenerator;
use crate::structs::config::config::Config;
use crate::structs::generated_report::GeneratedReport;
use crate::structs::handler_response::HandlerResponse;
use crate::structs::report_descriptor::ReportDescriptor;
use crate::structs::report_request::ReportRequest;
use crate::traits::ai_provider::ProviderFactory;

/// Where the provider API key comes from. `Env` is read on every request so a
/// key added after startup is picked up.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    Env(String),
    Fixed(Option<String>),
}

impl CredentialSource {
    pub fn resolve(&self) -> Option<String> {
        let key = match self {
            CredentialSource::Env(name) => std::env::var(name).ok(),
            CredentialSource::Fixed(key) => key.clone(),
        };
        key.filter(|k| !k.trim().is_empty())
    }

    fn describe(&self) -> String {
        match self {
            CredentialSource::Env(name) => name.clone(),
            CredentialSource::Fixed(_) => "<fixed>".to_string(),
        }
    }
}

pub struct ReportHandler {
    factory: Arc<dyn ProviderFactory>,
    models: Vec<String>,
    descriptor: Arc<ReportDescriptor>,
    credentials: CredentialSource,
}

impl ReportHandler {
    pub fn new(
        factory: Arc<dyn ProviderFactory>,
        models: Vec<String>,
        descriptor: ReportDescriptor,
        credentials: CredentialSource,
    ) -> Self {
        Self {
            factory,
            models,
            descriptor: Arc::new(descriptor),
            credentials,
        }
    }

    pub fn from_config(config: &Config) -> ProxyResult<Self> {
        let factory = GeminiProviderFactory::from_config(&config.ai)
            .map_err(|e| ProxyError::config_error(&e.to_string(), Some("ai")))?;

        Ok(Self::new(
            Arc::new(factory),
            config.ai.models.clone(),
            config.report.descriptor(),
            CredentialSource::Env(config.ai.api_key_env.clone()),
        ))
    }

    pub fn descriptor(&self) -> &ReportDescriptor {
        &self.descriptor
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Full request cycle: method, payload and credential checks, then the
    /// fallback loop. Never fails; every outcome becomes a status and body.
    pub async fn handle(&self, method: &Method, body: &[u8]) -> HandlerResponse {
        let request_id = Uuid::new_v4();
        log::info!("📥 [{}] {} report request ({})", request_id, method, self.descriptor.name);

        match self.process(method, body).await {
            Ok(generated) => {
                log::info!("📤 [{}] 200 via {} after {} attempt(s)", request_id, generated.model, generated.attempts);
                HandlerResponse::ok(generated.report)
            }
            Err(e) => {
                let status = e.status_code();
                if e.is_client_error() {
                    log::warn!("🚫 [{}] {} {}", request_id, status.as_u16(), e);
                } else {
                    log::error!("❌ [{}] {} {}", request_id, status.as_u16(), e.technical_details());
                }
                HandlerResponse::from_error(&e)
            }
        }
    }

    async fn process(&self, method: &Method, body: &[u8]) -> ProxyResult<GeneratedReport> {
        if *method != Method::POST {
            return Err(ProxyError::MethodNotAllowed);
        }

        let target = Self::extract_target(body)?;
        self.generate(&target).await
    }

    /// Credential check plus the fallback loop; shared by the HTTP route and
    /// the one-shot CLI command.
    pub async fn generate(&self, target: &str) -> ProxyResult<GeneratedReport> {
        self.generate_with_progress(target, |_, _, _| {}).await
    }

    /// `generate` that reports each candidate before it is called.
    pub async fn generate_with_progress<F>(&self, target: &str, on_attempt: F) -> ProxyResult<GeneratedReport>
    where
        F: Fn(&str, usize, usize),
    {
        if target.trim().is_empty() {
            return Err(ProxyError::MissingTarget);
        }

        let api_key = self.credentials.resolve().ok_or_else(|| ProxyError::MissingApiKey {
            env_var: self.credentials.describe(),
        })?;

        let generator = ReportGenerator::new(
            self.factory.create(api_key),
            self.models.clone(),
            Arc::clone(&self.descriptor),
        );

        generator.generate_with_progress(target.trim(), on_attempt).await
    }

    fn extract_target(body: &[u8]) -> ProxyResult<String> {
        let request: ReportRequest = serde_json::from_slice(body).map_err(|_| ProxyError::MissingTarget)?;

        request
            .target
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ProxyError::MissingTarget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_target_trims_and_rejects_blank() {
        assert_eq!(ReportHandler::extract_target(br#"{"target": "  Vision API "}"#).unwrap(), "Vision API");
        let bodies: [&[u8]; 6] = [br#"{"target": "   "}"#, br#"{"target": ""}"#, br#"{}"#, br#"{"target": 42}"#, b"not json", b""];
        for body in bodies {
            assert!(matches!(ReportHandler::extract_target(body), Err(ProxyError::MissingTarget)));
        }
    }

    #[test]
    fn blank_credentials_do_not_resolve() {
        assert_eq!(CredentialSource::Fixed(Some("  ".to_string())).resolve(), None);
        assert_eq!(CredentialSource::Fixed(Some("k".to_string())).resolve(), Some("k".to_string()));
        assert_eq!(CredentialSource::Env("REPORT_PROXY_TEST_UNSET_VARIABLE".to_string()).resolve(), None);
    }
}
