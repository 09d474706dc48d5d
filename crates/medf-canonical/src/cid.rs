//! Simulated content identifiers.
//!
//! A simulated identifier looks like a CIDv1 address but is derived purely
//! from the SHA-256 digest of a canonical JSON string. It is never resolved
//! through a real distributed network; equality of independently computed
//! identifiers is the contract.

use crate::digest::sha256_hex;

/// Fixed literal tag prefixing every simulated identifier.
pub const CID_PREFIX: &str = "bafybeig";

/// Number of digest characters carried after the prefix.
const CID_HASH_CHARS: usize = 52;

/// Derives a simulated content identifier from a canonical JSON string.
///
/// The address is [`CID_PREFIX`] followed by the first 52 hex characters of
/// the SHA-256 digest of the input.
pub fn simulate_cid(canonical_json: &str) -> String {
    let hash = sha256_hex(canonical_json);
    format!("{}{}", CID_PREFIX, &hash[..CID_HASH_CHARS])
}
