use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::EvidenceLevel;

/// Supporting evidence behind an interaction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evidence {
    /// Source database names, e.g. "DrugBank".
    pub sources: Vec<String>,
    pub study_count: u32,
    pub case_reports: u32,
    pub evidence_level: EvidenceLevel,
    pub last_updated: jiff::civil::Date,
}
