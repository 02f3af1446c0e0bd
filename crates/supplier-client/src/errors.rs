//! Client error types.
//!
//! Every failure a command can hit surfaces as one of these variants with
//! a human-readable message; the CLI layer renders them as a status/error
//! JSON object instead of crashing with a raw trace. A 404 from the
//! gateway is a distinguished sub-case so callers can render a specific
//! not-found outcome.

use supplier_protocol::ProtocolError;
use thiserror::Error;

/// Errors raised by client-side operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Private key file could not be read.
    #[error("failed to read private key {path}: {source}")]
    KeyFile {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Private key material could not be parsed.
    #[error("unable to load private key: {0}")]
    InvalidKey(String),

    /// The requested operation submits a transaction but no signing key
    /// was configured.
    #[error("a signing key is required for this operation")]
    SignerRequired,

    /// Network-level failure talking to the gateway.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Gateway answered with a non-success status other than 404.
    #[error("error {status}: {reason}")]
    Rest {
        /// HTTP status code.
        status: u16,
        /// Status reason phrase.
        reason: String,
    },

    /// Gateway answered 404 for the addressed resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// Gateway response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Stored state entry violated the supplier wire contract.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Envelope serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}
