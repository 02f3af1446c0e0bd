//! Outbound port to the ledger's state store.

use crate::errors::StateStoreError;

/// State store abstraction provided by the ledger runtime.
///
/// The runtime scopes each invocation to the addresses declared in the
/// transaction's input/output sets; the handler only ever touches the one
/// address it derives from the payload's `supplier_id`.
pub trait StateStore: Send + Sync {
    /// Fetch the value stored at `address`, if any.
    fn get_state(&self, address: &str) -> Result<Option<Vec<u8>>, StateStoreError>;

    /// Store `value` at `address`, replacing any prior value.
    fn set_state(&self, address: &str, value: Vec<u8>) -> Result<(), StateStoreError>;
}
