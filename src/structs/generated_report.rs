use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    /// Candidate model that produced the report.
    pub model: String,
    pub report: Value,
    /// 1-based position of the winning model in the candidate list.
    pub attempts: usize,
}
