use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One medication in the catalog.
///
/// The `id` is unique within a catalog and never changes for the life of
/// the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Drug {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    /// Commercial names, in formulary order. May be empty.
    pub brand_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rx_norm_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub atc_code: Option<String>,
    pub description: String,
    pub therapeutic_class: Vec<String>,
    pub mechanism: String,
    /// Metabolic pathways, e.g. CYP enzymes.
    pub metabolism: Vec<String>,
    pub contraindications: Vec<String>,
    pub warnings: Vec<String>,
}

impl Drug {
    /// True when `self` and `other` share at least one therapeutic class.
    pub fn shares_class_with(&self, other: &Drug) -> bool {
        self.therapeutic_class
            .iter()
            .any(|class| other.therapeutic_class.contains(class))
    }
}
