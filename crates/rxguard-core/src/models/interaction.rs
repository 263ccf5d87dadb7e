use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::{Drug, Evidence, Severity};

/// A known clinical interaction between exactly two drugs.
///
/// The pair is unordered: `drug_a` and `drug_b` are interchangeable, and
/// lookups must match a record regardless of which side each drug
/// arrived in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interaction {
    pub id: String,
    pub drug_a: Drug,
    pub drug_b: Drug,
    pub severity: Severity,
    /// Confidence score in [0, 1].
    pub confidence: f64,
    /// Biological mechanism of the interaction.
    pub mechanism: String,
    pub clinical_effects: Vec<String>,
    /// Time to onset, free text.
    pub onset: String,
    /// Management strategy, free text.
    pub management: String,
    pub evidence: Evidence,
    pub last_updated: jiff::civil::Date,
}

impl Interaction {
    /// Check the record-level invariants: confidence within [0, 1] and
    /// two distinct endpoints.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(CoreError::ConfidenceOutOfRange {
                id: self.id.clone(),
                confidence: self.confidence,
            });
        }
        if self.drug_a.id == self.drug_b.id {
            return Err(CoreError::SelfInteraction {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// True when this record covers the unordered pair `(a, b)`.
    pub fn matches_pair(&self, a: &Drug, b: &Drug) -> bool {
        (self.drug_a.id == a.id && self.drug_b.id == b.id)
            || (self.drug_a.id == b.id && self.drug_b.id == a.id)
    }
}
