use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate comment")]
    Duplicate,
    #[error("comment not found: {0}")]
    NotFound(String),
    #[error("storage read error: {0}")]
    StorageRead(String),
    #[error("storage write error: {0}")]
    StorageWrite(String),
}

impl ServiceError {
    pub fn not_found(id: &str) -> Self { Self::NotFound(id.to_string()) }
}
