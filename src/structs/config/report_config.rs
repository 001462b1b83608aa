use serde::{Deserialize, Serialize};
use crate::enums::report_variant::ReportVariant;
use crate::structs::report_descriptor::ReportDescriptor;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub variant: ReportVariant,

    /// Replaces the built-in variant entirely when present.
    #[serde(default)]
    pub custom: Option<ReportDescriptor>,
}

impl ReportConfig {
    pub fn descriptor(&self) -> ReportDescriptor {
        match &self.custom {
            Some(custom) => custom.clone(),
            None => self.variant.descriptor(),
        }
    }
}
