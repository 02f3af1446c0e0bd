//! Deterministic state address derivation.

use sha2::{Digest, Sha512};

/// Length of the hashed portion of an address, in hex characters.
const ADDRESS_HASH_LEN: usize = 64;

/// Derive the state address for a supplier record.
///
/// The address is the namespace prefix followed by the first 64 hex
/// characters of the SHA-512 digest of the UTF-8 `supplier_id` bytes. With
/// the standard 6-char prefix the result is 70 hex characters.
///
/// The address is a pure function of `supplier_id` alone: identical ids
/// yield identical addresses under any process at any time, and distinct
/// ids do not plausibly collide (SHA-512 collision resistance).
pub fn supplier_address(namespace_prefix: &str, supplier_id: &str) -> String {
    let digest = Sha512::digest(supplier_id.as_bytes());
    let mut hash_hex = hex::encode(digest);
    hash_hex.truncate(ADDRESS_HASH_LEN);
    format!("{namespace_prefix}{hash_hex}")
}
