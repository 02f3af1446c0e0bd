//! Family identity constants.
//!
//! A transaction family is a named, versioned handler contract. The ledger
//! routes transactions to handlers by `(family_name, family_version)` and
//! partitions state by the 6-hex-char namespace prefix derived from the
//! family name.

use sha2::{Digest, Sha512};

/// Registered family name.
pub const FAMILY_NAME: &str = "supplier";

/// Registered family version.
pub const FAMILY_VERSION: &str = "1.0";

/// Payload encoding advertised to the ledger.
pub const PAYLOAD_ENCODING: &str = "csv-utf8";

/// Derive the family namespace prefix: the first 6 hex characters of the
/// SHA-512 digest of the family name.
///
/// Pure and deterministic; callers pass the result into the handler and
/// client explicitly rather than reading shared mutable state.
pub fn namespace_prefix() -> String {
    let digest = Sha512::digest(FAMILY_NAME.as_bytes());
    let mut prefix = hex::encode(digest);
    prefix.truncate(6);
    prefix
}
