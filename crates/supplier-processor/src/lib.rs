//! # Supplier Processor - Transaction Handler
//!
//! The state machine applied by the ledger runtime for the `supplier`
//! transaction family.
//!
//! ## Purpose
//!
//! Validates submitted payloads, reads prior state at the derived address,
//! applies `create` / `add-part`, and writes back merged state. The ledger
//! runtime invokes [`SupplierTransactionHandler::apply`] once per
//! transaction; consensus, ordering, and the merkle state store live
//! outside this crate and are reached only through the [`ports::StateStore`]
//! port.
//!
//! ## Invariants
//!
//! - Exactly one record exists per distinct `supplier_id`; its address is a
//!   pure function of the id alone.
//! - All preconditions are evaluated before any state mutation; a failed
//!   precondition aborts the whole transaction with no partial writes.
//! - `create` is idempotent-rejecting: a second create for the same id
//!   fails and leaves the first record's bytes unchanged.
//! - `add-part` with an already-present part id rewrites the value
//!   byte-identically.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod errors;
pub mod handler;
pub mod ports;

// Re-exports
pub use adapters::InMemoryStateStore;
pub use errors::{ApplyError, StateStoreError};
pub use handler::SupplierTransactionHandler;
pub use ports::StateStore;
