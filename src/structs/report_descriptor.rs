use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::config::constants::TARGET_PLACEHOLDER;
use crate::enums::ai_provider_error::AiProviderError;

/// Everything that distinguishes one report flavour from another: the prompt
/// sent upstream and the top-level keys expected back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDescriptor {
    pub name: String,
    pub title: String,
    pub prompt_template: String,
    #[serde(default)]
    pub required_fields: Vec<String>,
    pub offline_message: String,
}

impl ReportDescriptor {
    pub fn render_prompt(&self, target: &str) -> String {
        self.prompt_template.replace(TARGET_PLACEHOLDER, target)
    }

    /// Top-level shape check. An empty `required_fields` accepts any JSON value.
    pub fn check_shape(&self, report: &Value) -> Result<(), AiProviderError> {
        if self.required_fields.is_empty() {
            return Ok(());
        }

        let object = report.as_object().ok_or_else(|| {
            AiProviderError::ShapeMismatch(format!("expected a JSON object for '{}'", self.name))
        })?;

        let missing: Vec<&str> = self.required_fields
            .iter()
            .filter(|field| !object.contains_key(field.as_str()))
            .map(|field| field.as_str())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AiProviderError::ShapeMismatch(format!("missing field(s): {}", missing.join(", "))))
        }
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Report name must not be empty".to_string());
        }
        if !self.prompt_template.contains(TARGET_PLACEHOLDER) {
            errors.push(format!("Report '{}' prompt template does not contain {}", self.name, TARGET_PLACEHOLDER));
        }
        if self.offline_message.trim().is_empty() {
            errors.push(format!("Report '{}' offline message must not be empty", self.name));
        }
        if self.required_fields.iter().any(|field| field.trim().is_empty()) {
            errors.push(format!("Report '{}' has an empty required field name", self.name));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
