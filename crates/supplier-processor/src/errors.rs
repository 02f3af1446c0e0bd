//! Handler error types.
//!
//! The apply-path taxonomy has two classes: invalid transactions are
//! rejected deterministically with no state change and surface to the
//! submitter as a rejected batch; internal errors signal a ledger-data
//! integrity fault and are not retryable by the handler itself.

use thiserror::Error;

/// Errors from the state store port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateStoreError {
    /// Backend failure reported by the ledger runtime.
    #[error("state store error: {0}")]
    Backend(String),

    /// A lock guarding an in-process store was poisoned.
    #[error("state store lock poisoned")]
    LockPoisoned,
}

/// Errors raised while applying a transaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The transaction is malformed or violates a precondition. The ledger
    /// discards any staged writes and rejects the batch.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Stored state could not be read back or decoded. This indicates
    /// ledger data corruption, not a fault in the submitted transaction.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StateStoreError> for ApplyError {
    fn from(err: StateStoreError) -> Self {
        Self::Internal(err.to_string())
    }
}
