use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_ROUTE_PATH: &str = "generate";
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const MAX_REQUEST_BODY_BYTES: u64 = 64 * 1024;

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_KEY";
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_CANDIDATE_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-1.5-flash",
];

pub const TARGET_PLACEHOLDER: &str = "{{TARGET}}";

pub const CONFIG_DIR_NAME: &str = "report-proxy";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";
pub const MISSING_TARGET_MESSAGE: &str = "Target is required";
pub const MISSING_API_KEY_MESSAGE: &str = "Server configuration error: Missing API Key";
pub const EMPTY_RESPONSE_MESSAGE: &str = "AI returned an empty response";

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

pub fn request_timeout(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
