use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::prompts::ethics_audit_prompt::ETHICS_AUDIT_PROMPT;
use crate::prompts::logistics_command_prompt::LOGISTICS_COMMAND_PROMPT;
use crate::prompts::monitoring_session_prompt::MONITORING_SESSION_PROMPT;
use crate::prompts::supply_chain_prompt::SUPPLY_CHAIN_PROMPT;
use crate::structs::report_descriptor::ReportDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportVariant {
    #[default]
    EthicsAudit,
    MonitoringSession,
    SupplyChain,
    LogisticsCommand,
}

impl ReportVariant {
    pub const ALL: [ReportVariant; 4] = [
        ReportVariant::EthicsAudit,
        ReportVariant::MonitoringSession,
        ReportVariant::SupplyChain,
        ReportVariant::LogisticsCommand,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReportVariant::EthicsAudit => "ethics-audit",
            ReportVariant::MonitoringSession => "monitoring-session",
            ReportVariant::SupplyChain => "supply-chain",
            ReportVariant::LogisticsCommand => "logistics-command",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportVariant::EthicsAudit => "Real-Time Ethical Risk Monitor",
            ReportVariant::MonitoringSession => "Live Monitoring Session",
            ReportVariant::SupplyChain => "Supply Chain Anomaly Report",
            ReportVariant::LogisticsCommand => "Logistics Command Center",
        }
    }

    pub fn offline_message(&self) -> &'static str {
        match self {
            ReportVariant::EthicsAudit => "Ethical Audit Interface Offline",
            ReportVariant::MonitoringSession => "Monitoring Session Interface Offline",
            ReportVariant::SupplyChain => "Supply Chain Intelligence Offline",
            ReportVariant::LogisticsCommand => "Logistics Command Center Offline",
        }
    }

    fn prompt_template(&self) -> &'static str {
        match self {
            ReportVariant::EthicsAudit => ETHICS_AUDIT_PROMPT,
            ReportVariant::MonitoringSession => MONITORING_SESSION_PROMPT,
            ReportVariant::SupplyChain => SUPPLY_CHAIN_PROMPT,
            ReportVariant::LogisticsCommand => LOGISTICS_COMMAND_PROMPT,
        }
    }

    fn required_fields(&self) -> &'static [&'static str] {
        match self {
            ReportVariant::EthicsAudit => &["overall_integrity", "risk_status", "violations", "metrics"],
            ReportVariant::MonitoringSession => &["session_id", "status", "telemetry", "alerts"],
            ReportVariant::SupplyChain => &["risk_index", "anomalies", "nodes"],
            ReportVariant::LogisticsCommand => &["shipment_status", "route", "checkpoints", "alerts"],
        }
    }

    pub fn descriptor(&self) -> ReportDescriptor {
        ReportDescriptor {
            name: self.name().to_string(),
            title: self.title().to_string(),
            prompt_template: self.prompt_template().to_string(),
            required_fields: self.required_fields().iter().map(|f| f.to_string()).collect(),
            offline_message: self.offline_message().to_string(),
        }
    }
}

impl fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ReportVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportVariant::ALL
            .iter()
            .copied()
            .find(|variant| variant.name() == s.trim().to_lowercase())
            .ok_or_else(|| {
                let known: Vec<&str> = ReportVariant::ALL.iter().map(|v| v.name()).collect();
                format!("unknown report variant '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
