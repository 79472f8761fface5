#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Invalid search parameter: {0}")]
    InvalidSearchParameter(String),

    #[error("Store error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FhirError>;
