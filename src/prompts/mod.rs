pub mod ethics_audit_prompt;
pub mod logistics_command_prompt;
pub mod monitoring_session_prompt;
pub mod supply_chain_prompt;
