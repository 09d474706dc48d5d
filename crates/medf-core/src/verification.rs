//! Document verification against claimed hashes.
//!
//! Verification is a pure computation from a document value to a report; no
//! state is retained between calls and the input is never mutated. A hash
//! mismatch is not an error; it is the correctly-reported outcome of
//! tampering detection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::MedfDocument;
use crate::hashing::{compute_block_hash, compute_doc_hash};

/// Comparison of a block's claimed hash against its recomputed hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHashCheck {
    /// Block identifier.
    pub block_id: String,
    /// Claimed hash, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Recomputed hash.
    pub computed: String,
    /// Whether the claim holds, or no claim was made.
    pub valid: bool,
}

/// Comparison of the document's claimed hash against its recomputed hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocHashCheck {
    /// Claimed document hash, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Recomputed document hash.
    pub computed: String,
    /// Whether the claim holds, or no claim was made.
    pub valid: bool,
}

/// Structured comparison of claimed vs. recomputed hashes for a document
/// and its blocks. Ephemeral; not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Overall verdict: every block check and the document check hold.
    pub valid: bool,
    /// Per-block results, in document order.
    pub block_results: Vec<BlockHashCheck>,
    /// Document hash result.
    pub doc_hash_result: DocHashCheck,
    /// Diagnostic for input that did not parse as a document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationReport {
    /// Report for input that could not be interpreted as a document.
    pub fn malformed(message: impl Into<String>) -> Self {
        VerificationReport {
            valid: false,
            block_results: Vec::new(),
            doc_hash_result: DocHashCheck {
                expected: None,
                computed: String::new(),
                valid: false,
            },
            error: Some(message.into()),
        }
    }
}

/// Verifies a document's hash claims.
///
/// A block or document carrying no claimed hash is trivially valid: the
/// absence of a claim cannot be falsified. A claim that is present but
/// wrong is invalid.
pub fn verify_document(document: &MedfDocument) -> VerificationReport {
    let block_results: Vec<BlockHashCheck> = document
        .blocks
        .iter()
        .map(|block| {
            let computed = compute_block_hash(block);
            let valid = match &block.block_hash {
                None => true,
                Some(expected) => expected == &computed,
            };
            BlockHashCheck {
                block_id: block.block_id.as_ref().to_string(),
                expected: block.block_hash.clone(),
                computed,
                valid,
            }
        })
        .collect();

    let computed_doc_hash = match compute_doc_hash(document) {
        Ok(hash) => hash,
        Err(e) => return VerificationReport::malformed(e.to_string()),
    };
    let doc_hash_result = match &document.doc_hash {
        None => DocHashCheck {
            expected: None,
            computed: computed_doc_hash,
            valid: true,
        },
        Some(claimed) => DocHashCheck {
            valid: claimed.value == computed_doc_hash,
            expected: Some(claimed.value.clone()),
            computed: computed_doc_hash,
        },
    };

    let valid = block_results.iter().all(|r| r.valid) && doc_hash_result.valid;

    VerificationReport {
        valid,
        block_results,
        doc_hash_result,
        error: None,
    }
}

/// Verifies an untyped JSON value claimed to be a document.
///
/// Input that does not parse as the document shape yields a failed report
/// rather than an error, so callers can always render the outcome.
pub fn verify_document_value(value: &Value) -> VerificationReport {
    match serde_json::from_value::<MedfDocument>(value.clone()) {
        Ok(document) => verify_document(&document),
        Err(e) => VerificationReport::malformed(e.to_string()),
    }
}
