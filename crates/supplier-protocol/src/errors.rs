//! Protocol error types.

use thiserror::Error;

/// Errors raised while encoding or decoding supplier wire formats.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Payload did not split into the required number of fields.
    #[error("invalid payload serialization: expected {expected} fields, got {actual}")]
    MalformedPayload {
        /// Required field count.
        expected: usize,
        /// Field count actually found.
        actual: usize,
    },

    /// Payload or state value bytes were not valid UTF-8.
    #[error("invalid UTF-8 in serialized data")]
    InvalidUtf8,

    /// Action string is not part of the closed action enum.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Stored state value could not be split or deserialized.
    #[error("failed to deserialize state value: {0}")]
    MalformedStateValue(String),
}
