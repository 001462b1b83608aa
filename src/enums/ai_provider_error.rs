use std::error::Error;
use std::fmt;

/// Failure of a single candidate-model attempt. Every variant is recoverable:
/// the generator moves on to the next candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum AiProviderError {
    NetworkError(String),
    ApiError { status: u16, message: String },
    SerializationError(String),
    EmptyResponse,
    InvalidJson(String),
    ShapeMismatch(String),
}

impl AiProviderError {
    pub fn kind(&self) -> &'static str {
        match self {
            AiProviderError::NetworkError(_) => "network",
            AiProviderError::ApiError { .. } => "api",
            AiProviderError::SerializationError(_) => "serialization",
            AiProviderError::EmptyResponse => "empty_response",
            AiProviderError::InvalidJson(_) => "invalid_json",
            AiProviderError::ShapeMismatch(_) => "shape_mismatch",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AiProviderError::ApiError { status: 404, .. })
    }
}

impl fmt::Display for AiProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AiProviderError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AiProviderError::ApiError { status, message } => write!(f, "Gemini API Error (HTTP {}): {}", status, message),
            AiProviderError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
            AiProviderError::EmptyResponse => write!(f, "{}", crate::config::constants::EMPTY_RESPONSE_MESSAGE),
            AiProviderError::InvalidJson(msg) => write!(f, "Invalid JSON in model output: {}", msg),
            AiProviderError::ShapeMismatch(msg) => write!(f, "Report shape mismatch: {}", msg),
        }
    }
}

impl Error for AiProviderError {}
