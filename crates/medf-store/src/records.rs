use serde::{Deserialize, Serialize};

/// Stored document row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Registry-assigned numeric id.
    pub id: u64,
    /// MeDF document id (the citable identifier).
    pub medf_id: String,
    /// MeDF format version.
    pub medf_version: String,
    /// Derived title.
    pub title: String,
    /// Issuing party.
    pub issuer: String,
    /// Optional document type tag.
    pub document_type: Option<String>,
    /// Snapshot timestamp string.
    pub snapshot: String,
    /// Full canonical-form document, stored as serialized text.
    pub medf_json: String,
    /// Document hash at publish time.
    pub doc_hash: String,
    /// Simulated content identifier.
    pub ipfs_cid: String,
    /// Number of blocks at publish time.
    pub block_count: usize,
}

/// Stored block row, ordered by `sort_order` within its document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Owning document's registry id.
    pub document_id: u64,
    /// Block identifier within the document.
    pub block_id: String,
    /// Role tag.
    pub role: String,
    /// Text format.
    pub format: String,
    /// Block text content.
    pub text_content: String,
    /// Block hash at publish time, if stamped.
    pub block_hash: Option<String>,
    /// Position within the document.
    pub sort_order: usize,
}

/// Stored cross-document reference row.
///
/// `resolved` and `target_doc_id` flip when a document matching
/// `target_medf_id` exists or later appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Registry id of the citing document.
    pub source_doc_id: u64,
    /// Block the citation appeared in, if known.
    pub source_block_id: Option<String>,
    /// Cited MeDF document id (may not exist yet).
    pub target_medf_id: String,
    /// Cited block id, if the citation named one.
    pub target_block_id: Option<String>,
    /// The raw matched citation text.
    pub citation: String,
    /// Whether the target document currently exists in the registry.
    pub resolved: bool,
    /// Registry id of the target document, once resolved.
    pub target_doc_id: Option<u64>,
}
