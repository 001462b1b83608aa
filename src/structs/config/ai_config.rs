use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    /// Candidate models, tried in this order until one produces a report.
    #[serde(default = "ConfigHelper::default_models")]
    pub models: Vec<String>,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub temperature: Option<f64>,

    #[serde(default)]
    pub max_output_tokens: Option<u32>,

    /// Sent as `generationConfig.responseMimeType`, e.g. `application/json`.
    #[serde(default)]
    pub response_mime_type: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            models: ConfigHelper::default_models(),
            api_key_env: ConfigHelper::default_api_key_env(),
            base_url: ConfigHelper::default_base_url(),
            request_timeout_secs: None,
            temperature: None,
            max_output_tokens: None,
            response_mime_type: None,
        }
    }
}
