use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Frequency, Severity, Timeline};

/// A documented side effect of one catalog drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SideEffect {
    pub id: String,
    /// The catalog drug this effect belongs to.
    pub drug_id: String,
    pub name: String,
    pub description: String,
    pub frequency: Frequency,
    pub severity: Severity,
    pub timeline: Timeline,
    /// Time to onset, free text.
    pub onset: String,
    /// Expected duration, free text.
    pub duration: String,
    pub reversible: bool,
    pub monitoring: Vec<String>,
    pub management: Vec<String>,
}
