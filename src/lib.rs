//! Report proxy: turns a target name into a generated JSON report by trying
//! a ranked list of Gemini models until one answers with usable JSON.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod server;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
