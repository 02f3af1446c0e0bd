//! # Supplier Client - Transaction Builder & Submitter
//!
//! Client-side half of the `supplier` transaction family. Builds the flat
//! delimited payload for a requested operation, wraps it in a signed
//! transaction and batch, submits it to the ledger's REST gateway, and
//! reads stored state back out.
//!
//! ## Components
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `signing` | secp256k1 signer loaded from a key file |
//! | `envelope` | Transaction/batch header construction and signing |
//! | `client` | REST submission and state-query operations |
//! | `view` | Decoded records mapped to the public output shape |
//!
//! The gateway itself (consensus, block production, state storage) is an
//! external service; this crate only speaks its submission and query
//! endpoints.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod envelope;
pub mod errors;
pub mod signing;
pub mod view;

// Re-exports
pub use client::{BasicAuth, BatchSubmitResponse, ClientConfig, SupplierClient};
pub use errors::ClientError;
pub use signing::Signer;
pub use view::SupplierView;
