use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum LokalError {
    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, LokalError>;
