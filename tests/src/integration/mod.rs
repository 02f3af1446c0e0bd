//! Cross-crate integration flows.

pub mod addressing;
pub mod supplier_flow;
