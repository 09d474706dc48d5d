//! Block and document hash derivation.
//!
//! Block hashes cover exactly `{block_id, role, format, text}`; `block_hash`
//! itself is never part of the hashed subset. Document hashes cover every
//! top-level field except `doc_hash`, `signature`, and `index`, including
//! fields this crate does not model. The exclusion list must evolve in
//! lockstep with the schema when derived fields are added.

use medf_canonical::{
    canonical_string, canonicalize, sha256_hex, simulate_cid, Digest, DigestAlg,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::document::{MedfBlock, MedfDocument};
use crate::errors::CoreError;

/// Top-level keys excluded from document hashing.
pub const DOC_HASH_EXCLUDED_KEYS: [&str; 3] = ["doc_hash", "signature", "index"];

/// Computes the hash of a block's content fields.
///
/// The canonicalizer sorts keys, so the field listing order here is
/// immaterial.
pub fn compute_block_hash(block: &MedfBlock) -> String {
    let hashable = json!({
        "block_id": &block.block_id,
        "role": &block.role,
        "format": &block.format,
        "text": &block.text,
    });
    sha256_hex(&canonical_string(&hashable))
}

/// Computes the document hash over all content-bearing top-level fields.
///
/// Generic over `Serialize` so typed documents and raw JSON values hash
/// identically. Fails only if the value cannot be represented as JSON.
pub fn compute_doc_hash<T: Serialize>(document: &T) -> Result<String, CoreError> {
    let mut value: Value = serde_json::to_value(document)
        .map_err(|e| CoreError::Serialization(e.to_string()))?;
    if let Value::Object(map) = &mut value {
        for key in DOC_HASH_EXCLUDED_KEYS {
            map.remove(key);
        }
    }
    Ok(sha256_hex(&canonical_string(&value)))
}

/// Digests derived while stamping a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDigests {
    /// Freshly computed document hash.
    pub doc_hash: String,
    /// Canonical JSON of the stamped document (the stored `medf_json` form).
    pub canonical_json: String,
    /// Simulated content identifier over the canonical JSON.
    pub ipfs_cid: String,
}

/// Stamps fresh hashes onto a document.
///
/// Sets `block_hash` on every block, then `doc_hash` over the result (block
/// hashes are content once stamped, so the document hash covers them), and
/// returns the derived digests. The same hash routines serve verification,
/// so a freshly stamped document always verifies.
pub fn stamp_document(document: &mut MedfDocument) -> Result<DocumentDigests, CoreError> {
    for block in &mut document.blocks {
        block.block_hash = Some(compute_block_hash(block));
    }

    let doc_hash = compute_doc_hash(document)?;
    document.doc_hash = Some(Digest {
        algorithm: DigestAlg::Sha256,
        value: doc_hash.clone(),
    });

    let canonical_json = canonicalize(document)?;
    let ipfs_cid = simulate_cid(&canonical_json);

    Ok(DocumentDigests {
        doc_hash,
        canonical_json,
        ipfs_cid,
    })
}
