use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("interaction {id}: confidence {confidence} is outside [0, 1]")]
    ConfidenceOutOfRange { id: String, confidence: f64 },

    #[error("interaction {id}: both endpoints are the same drug")]
    SelfInteraction { id: String },
}
