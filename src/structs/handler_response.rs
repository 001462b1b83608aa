use serde_json::Value;
use warp::http::StatusCode;
use crate::errors::ProxyError;

#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl HandlerResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn from_error(error: &ProxyError) -> Self {
        Self {
            status: error.status_code(),
            body: error.to_json(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}
