use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::validation::ValidationError;

/// Supported digest algorithms for document and block hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlg {
    /// SHA-256 (the only algorithm MeDF v0.2 emits).
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Computes the SHA-256 digest over the UTF-8 bytes of `data`, rendered as
/// 64 lowercase hex characters.
pub fn sha256_hex(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

/// Algorithm + value hash claim, as embedded in a document's `doc_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub algorithm: DigestAlg,
    /// Lowercase hex digest (64 characters for SHA-256).
    pub value: String,
}

impl Digest {
    /// Constructs a validated digest.
    pub fn new(algorithm: DigestAlg, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let re = Regex::new(r"^[0-9a-f]{64}$").expect("invalid regex");
        if !re.is_match(&value) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value,
            });
        }
        Ok(Digest { algorithm, value })
    }
}
