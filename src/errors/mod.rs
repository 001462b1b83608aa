use serde_json::{json, Value};
use thiserror::Error;
use warp::http::StatusCode;
use crate::config::constants::{
    METHOD_NOT_ALLOWED_MESSAGE, MISSING_API_KEY_MESSAGE, MISSING_TARGET_MESSAGE,
};
use crate::enums::ai_provider_error::AiProviderError;

/// Request-level failures. Each one maps to exactly one HTTP status and a
/// `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("{}", METHOD_NOT_ALLOWED_MESSAGE)]
    MethodNotAllowed,

    #[error("{}", MISSING_TARGET_MESSAGE)]
    MissingTarget,

    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey { env_var: String },

    #[error("{message}")]
    GenerationFailed {
        message: String,
        attempts: usize,
        last_error: Option<AiProviderError>,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },
}

impl ProxyError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingTarget => StatusCode::BAD_REQUEST,
            Self::MissingApiKey { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::GenerationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client errors are rejected before any outbound call is made.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string() })
    }

    pub fn technical_details(&self) -> String {
        match self {
            Self::MissingApiKey { env_var } => format!("environment variable {} is not set", env_var),
            Self::GenerationFailed { attempts, last_error: Some(err), .. } => {
                format!("{} candidate(s) failed, last error [{}]: {}", attempts, err.kind(), err)
            }
            Self::GenerationFailed { attempts, last_error: None, .. } => {
                format!("{} candidate(s) attempted, no error recorded", attempts)
            }
            Self::Configuration { message, field: Some(field) } => format!("{} (field: {})", message, field),
            other => format!("{:?}", other),
        }
    }
}

pub type ProxyResult<T> = Result<T, ProxyError>;
