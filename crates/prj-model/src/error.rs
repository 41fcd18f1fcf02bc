use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid cutoff timestamp '{value}' (expected: YYYY-MM-DD HH:MM): {reason}")]
    InvalidCutoff { value: String, reason: String },
    #[error("invalid source control kind: {0} (expected: git|tfvc)")]
    InvalidSourceControl(String),
    #[error("invalid visibility: {0} (expected: private|public)")]
    InvalidVisibility(String),
}
