//! Canonicalization and digest primitives for MeDF documents.
//!
//! Every routine that participates in hashing or verification lives in this
//! crate: the deterministic JSON canonicalizer, the SHA-256 hex digest, the
//! citation grammar, and the simulated content identifier. The same code
//! serves the write path (stamping) and the read path (verification), so
//! canonical bytes for a given value are identical everywhere.
//!
#![deny(missing_docs)]

/// Canonicalization helpers for deterministic hashing.
pub mod canonicalizer;
/// Simulated content identifiers derived from canonical bytes.
pub mod cid;
/// Citation grammar and slug derivation.
pub mod citation;
/// Digest primitives.
pub mod digest;
/// Core identifiers and newtypes for document addressing.
pub mod identifiers;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{canonical_bytes, canonical_string, canonicalize, CanonicalizationError};
pub use cid::{simulate_cid, CID_PREFIX};
pub use citation::{extract_citations, slugify, Citation, CITATION_PATTERN};
pub use digest::{sha256_hex, Digest, DigestAlg};
pub use identifiers::{BlockId, MedfId, Timestamp};
pub use validation::ValidationError;
