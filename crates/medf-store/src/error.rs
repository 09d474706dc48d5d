use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A document with the same MeDF id already exists.
    #[error("document '{0}' already exists")]
    DuplicateDocument(String),
    /// No document with the given registry id.
    #[error("document {0} not found")]
    NotFound(u64),
    /// Stamping or hashing failed in the core.
    #[error("core error: {0}")]
    Core(#[from] medf_core::CoreError),
    /// Stored document text is not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
