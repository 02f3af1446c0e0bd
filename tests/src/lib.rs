//! # sparts-supplier Test Suite
//!
//! Cross-crate integration tests driving the transaction handler, the
//! wire codecs, and the client-side envelope construction together.
//!
//! ```bash
//! cargo test -p supplier-tests
//! ```

#![allow(dead_code)]

pub mod integration;
