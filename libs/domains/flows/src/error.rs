use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Qdrant error: {0}")]
    Qdrant(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type IndexResult<T> = Result<T, IndexError>;

impl From<qdrant_client::QdrantError> for IndexError {
    fn from(err: qdrant_client::QdrantError) -> Self {
        IndexError::Qdrant(err.to_string())
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        IndexError::Internal(format!("JSON error: {}", err))
    }
}
