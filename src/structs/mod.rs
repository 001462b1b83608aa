pub mod ai;
pub mod cli;
pub mod config;
pub mod generated_report;
pub mod handler_response;
pub mod report_descriptor;
pub mod report_request;
