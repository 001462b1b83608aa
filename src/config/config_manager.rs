use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# report-proxy configuration

[server]
# IP literal; use "::1" or "::" for IPv6
host = "127.0.0.1"
port = 8080
# Served as POST /api/<route> (and POST /)
route = "generate"
# Browser origins allowed to POST; leave unset to allow any origin
# allowed_origins = ["https://dashboard.example.com"]

[ai]
# Tried in order; the first model that returns a usable report wins
models = ["gemini-2.5-flash", "gemini-2.0-flash", "gemini-1.5-flash"]
# Name of the environment variable holding the Gemini API key
api_key_env = "GEMINI_KEY"
base_url = "https://generativelanguage.googleapis.com/v1beta"
# request_timeout_secs = 60
# temperature = 1.0
# max_output_tokens = 8192
# Ask Gemini for a JSON body instead of fenced text
# response_mime_type = "application/json"

[report]
# ethics-audit | monitoring-session | supply-chain | logistics-command
variant = "ethics-audit"

# A custom report replaces the built-in variant
# [report.custom]
# name = "vendor-risk"
# title = "Vendor Risk Snapshot"
# prompt_template = """Assess vendor "{{TARGET}}". Return ONLY JSON with "score" (0-100) and "findings" (list)."""
# required_fields = ["score", "findings"]
# offline_message = "Vendor Risk Interface Offline"
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// An explicit path must exist. Without one, the file in the home
    /// directory is used when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn sample_config() -> &'static str {
        SAMPLE_CONFIG
    }

    pub fn create_sample_config(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            bail!("config file already exists: {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(path, SAMPLE_CONFIG)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.models.is_empty() {
            errors.push("At least one candidate model must be configured in [ai].models".to_string());
        }

        let mut names = std::collections::HashSet::new();
        for model in &config.ai.models {
            if model.trim().is_empty() {
                errors.push("Candidate model names must not be empty".to_string());
            } else if !names.insert(model) {
                errors.push(format!("Duplicate candidate model: {}", model));
            }
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("[ai].api_key_env must name an environment variable".to_string());
        }

        if !config.ai.base_url.starts_with("http://") && !config.ai.base_url.starts_with("https://") {
            errors.push(format!("[ai].base_url is not an http(s) URL: {}", config.ai.base_url));
        }

        if config.ai.request_timeout_secs == Some(0) {
            errors.push("[ai].request_timeout_secs must be greater than zero".to_string());
        }

        if config.server.socket_addr().is_err() {
            errors.push(format!("[server].host must be an IPv4 or IPv6 address: '{}'", config.server.host));
        }

        let route = config.server.route.trim_matches('/');
        if route.is_empty() || route.contains('/') {
            errors.push(format!("[server].route must be a single path segment: '{}'", config.server.route));
        }

        for origin in &config.server.allowed_origins {
            let authority = origin
                .strip_prefix("http://")
                .or_else(|| origin.strip_prefix("https://"));
            match authority {
                Some(authority) if !authority.is_empty() && !authority.contains('/') => {}
                _ => errors.push(format!("[server].allowed_origins entry is not an http(s) origin: {}", origin)),
            }
        }

        if let Err(report_errors) = config.report.descriptor().validate() {
            errors.extend(report_errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
