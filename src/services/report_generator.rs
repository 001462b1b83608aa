use std::sync::Arc;
use serde_json::Value;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{ProxyError, ProxyResult};
use crate::helpers::fence_stripper::strip_code_fences;
use crate::structs::generated_report::GeneratedReport;
use crate::structs::report_descriptor::ReportDescriptor;
use crate::traits::ai_provider::AiProvider;

/// Runs the candidate-model fallback loop for one target.
///
/// Candidates are tried strictly in order, one at a time. Any provider or
/// parsing failure moves on to the next model; the first model whose text
/// parses into a report of the expected shape wins and nothing after it is
/// called.
pub struct ReportGenerator {
    provider: Arc<dyn AiProvider>,
    models: Vec<String>,
    descriptor: Arc<ReportDescriptor>,
}

impl ReportGenerator {
    pub fn new(provider: Arc<dyn AiProvider>, models: Vec<String>, descriptor: Arc<ReportDescriptor>) -> Self {
        Self {
            provider,
            models,
            descriptor,
        }
    }

    pub async fn generate(&self, target: &str) -> ProxyResult<GeneratedReport> {
        self.generate_with_progress(target, |_, _, _| {}).await
    }

    /// Calls `on_attempt(model, attempt, total)` before each candidate is tried.
    pub async fn generate_with_progress<F>(&self, target: &str, on_attempt: F) -> ProxyResult<GeneratedReport>
    where
        F: Fn(&str, usize, usize),
    {
        let prompt = self.descriptor.render_prompt(target);
        let mut last_error: Option<AiProviderError> = None;
        let mut attempts = 0;

        for model in &self.models {
            attempts += 1;
            on_attempt(model, attempts, self.models.len());

            match self.attempt(model, prompt.clone()).await {
                Ok(report) => {
                    log::info!("✅ Model {} produced a '{}' report (attempt {}/{})", model, self.descriptor.name, attempts, self.models.len());
                    return Ok(GeneratedReport {
                        model: model.clone(),
                        report,
                        attempts,
                    });
                }
                Err(e) => {
                    if e.is_not_found() {
                        log::warn!("⚠️ Model {} is not available, trying next candidate", model);
                    } else {
                        log::warn!("⚠️ Model {} failed [{}]: {}", model, e.kind(), e);
                    }
                    last_error = Some(e);
                }
            }
        }

        log::error!("❌ All {} candidate model(s) failed for '{}'", attempts, self.descriptor.name);

        Err(ProxyError::GenerationFailed {
            message: self.descriptor.offline_message.clone(),
            attempts,
            last_error,
        })
    }

    async fn attempt(&self, model: &str, prompt: String) -> Result<Value, AiProviderError> {
        let text = self.provider.generate_content(model.to_string(), prompt).await?;
        parse_report(&text, &self.descriptor)
    }
}

/// Fence-strips model text, parses it and checks the top-level shape.
pub fn parse_report(text: &str, descriptor: &ReportDescriptor) -> Result<Value, AiProviderError> {
    let stripped = strip_code_fences(text);
    if stripped.is_empty() {
        return Err(AiProviderError::EmptyResponse);
    }

    let report: Value = serde_json::from_str(&stripped)
        .map_err(|e| AiProviderError::InvalidJson(e.to_string()))?;

    descriptor.check_shape(&report)?;
    Ok(report)
}
