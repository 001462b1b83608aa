use crate::config::constants::{
    DEFAULT_CANDIDATE_MODELS, DEFAULT_ROUTE_PATH, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    GEMINI_API_BASE_URL, GEMINI_API_KEY_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_models() -> Vec<String> {
        DEFAULT_CANDIDATE_MODELS.iter().map(|m| m.to_string()).collect()
    }

    pub fn default_api_key_env() -> String {
        GEMINI_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        GEMINI_API_BASE_URL.to_string()
    }

    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_route() -> String {
        DEFAULT_ROUTE_PATH.to_string()
    }
}
