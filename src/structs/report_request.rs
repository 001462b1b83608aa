use serde::{Deserialize, Serialize};

/// Inbound payload. `target` is optional here so a missing field and a
/// wrong-typed one can both be reported as a 400 by the handler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRequest {
    #[serde(default)]
    pub target: Option<String>,
}
