use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid resolver config: {0}")]
    InvalidConfig(String),

    #[error("model error: {0}")]
    Model(#[from] berth_model::ModelError),
}
