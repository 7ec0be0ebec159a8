use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid proteinuria code: {0:?} (expected -, +, ++, +++ or ++++)")]
    InvalidProteinuria(String),

    #[error("invalid blood pressure: {0:?} (expected systolic/diastolic, e.g. 120/80)")]
    InvalidBloodPressure(String),
}
