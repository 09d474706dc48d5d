use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Serialization to a JSON value failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// Canonicalization failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] medf_canonical::CanonicalizationError),
    /// Identifier or digest validation failed.
    #[error("validation failed: {0}")]
    Validation(#[from] medf_canonical::ValidationError),
}
