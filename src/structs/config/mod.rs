pub mod ai_config;
pub mod config;
pub mod report_config;
pub mod server_config;
