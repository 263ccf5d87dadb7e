use thiserror::Error;

use rxguard_core::error::CoreError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate drug id: {0}")]
    DuplicateDrugId(String),

    #[error("record {record} references unknown drug {drug_id}")]
    UnknownDrug { record: String, drug_id: String },

    #[error("more than one interaction record for pair {drug_a} + {drug_b}")]
    DuplicateInteraction { drug_a: String, drug_b: String },

    #[error("invalid record: {0}")]
    Invalid(#[from] CoreError),
}
