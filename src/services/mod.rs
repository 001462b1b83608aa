pub mod ai_providers;
pub mod report_generator;
pub mod report_handler;
