use std::collections::BTreeMap;

use medf_canonical::{BlockId, Digest, MedfId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MeDF format version emitted by this implementation.
pub const MEDF_VERSION: &str = "0.2.1";

/// A named, role-tagged unit of text within a document, independently
/// hashable and citable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedfBlock {
    /// Block identifier, unique within the document.
    pub block_id: BlockId,
    /// Role tag (e.g. `body`, `abstract`).
    pub role: String,
    /// Text format (e.g. `markdown`, `plain`).
    pub format: String,
    /// Block text content.
    pub text: String,
    /// Derived content hash; absence means unverified/unsigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
}

impl MedfBlock {
    /// Creates an unstamped block.
    pub fn new(
        block_id: BlockId,
        role: impl Into<String>,
        format: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        MedfBlock {
            block_id,
            role: role.into(),
            format: format.into(),
            text: text.into(),
            block_hash: None,
        }
    }
}

/// Detached signature over a document. Never part of the document hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedfSignature {
    /// Signature algorithm (e.g. `ed25519`).
    pub algorithm: String,
    /// Signature value in the issuer's chosen encoding.
    pub value: String,
    /// Public key of the signer.
    pub public_key: String,
    /// When the signature was produced.
    pub signed_at: Timestamp,
    /// Optional signer display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer: Option<String>,
}

/// A versioned, block-structured MeDF document with optional integrity
/// metadata.
///
/// Unknown top-level fields are preserved in `extra` and participate in the
/// document hash; `doc_hash`, `signature`, and `index` never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedfDocument {
    /// MeDF format version (e.g. `0.2.1`).
    pub medf_version: String,
    /// Document identifier.
    pub id: MedfId,
    /// Snapshot timestamp of this revision.
    pub snapshot: Timestamp,
    /// Issuing party.
    pub issuer: String,
    /// Optional document type tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    /// Ordered blocks.
    pub blocks: Vec<MedfBlock>,
    /// Derived document hash claim; absence means unverified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_hash: Option<Digest>,
    /// Optional detached signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<MedfSignature>,
    /// Optional derived index mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<BTreeMap<String, Value>>,
    /// Unknown top-level fields, preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
