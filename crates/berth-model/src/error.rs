use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid task configuration document: {0}")]
    Json(#[from] serde_json::Error),
}
