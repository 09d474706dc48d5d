//! Document model, hashing, stamping, and verification for MeDF documents.
//!
//! This crate provides:
//! - Block and document types matching the MeDF v0.2 document shape
//! - Block/document hash derivation over canonical bytes
//! - Write-path stamping and read-path verification sharing one implementation
//!
//! Core invariants:
//! - `block_hash = sha256(canonical({block_id, role, format, text}))`
//! - `doc_hash = sha256(canonical(document minus {doc_hash, signature, index}))`
//! - Verification is deterministic, offline, and never mutates its input
//! - A document stamped by this crate always verifies with this crate
//!
#![deny(missing_docs)]

/// Block and document types.
pub mod document;
/// Error types for core operations.
pub mod errors;
/// Block and document hash derivation and stamping.
pub mod hashing;
/// Verification logic and report types.
pub mod verification;

pub use document::{MedfBlock, MedfDocument, MedfSignature, MEDF_VERSION};
pub use errors::CoreError;
pub use hashing::{
    compute_block_hash, compute_doc_hash, stamp_document, DocumentDigests,
    DOC_HASH_EXCLUDED_KEYS,
};
pub use verification::{
    verify_document, verify_document_value, BlockHashCheck, DocHashCheck, VerificationReport,
};
