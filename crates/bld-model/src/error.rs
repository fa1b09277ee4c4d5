use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown run policy: {0}")]
    UnknownRunPolicy(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
