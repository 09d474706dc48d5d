//! Document registry and reference graph for MeDF documents.
//!
//! This crate plays the storage collaborator role around the core engine:
//! - Stamps documents on publish and stores their canonical form
//! - Maintains block records in sort order
//! - Extracts citations into reference records and resolves them as targets
//!   appear; unresolved references are indexed by target id, so resolution
//!   re-attempts on publish are constant-time lookups rather than sweeps
//! - Audits stored documents by re-running verification on the stored bytes
//!
//! The registry is in-memory and single-owner. It holds no database or
//! network handles; relational persistence is a separate concern layered on
//! top of these record shapes.
//!
#![deny(missing_docs)]

/// Error types for registry operations.
pub mod error;
/// Persisted record shapes.
pub mod records;
/// In-memory registry implementation.
pub mod registry;

pub use error::StoreError;
pub use records::{BlockRecord, DocumentRecord, ReferenceRecord};
pub use registry::{DocumentRegistry, PublishOutcome};
