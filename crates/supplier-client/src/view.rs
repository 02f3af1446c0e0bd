//! Public output shape for decoded records.
//!
//! The stored record keeps its ledger field names; command output renames
//! `supplier_id` to `uuid`, `supplier_name` to `name`, and `supplier_url`
//! to `url`. The mapping is a structured parse-then-rebuild, never text
//! surgery on serialized JSON.

use serde::{Deserialize, Serialize};

use supplier_protocol::record::{Part, SupplierRecord};

/// A supplier record as rendered to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierView {
    /// Supplier identifier (`supplier_id` on the ledger).
    pub uuid: String,
    /// Short identifier.
    pub short_id: String,
    /// Display name (`supplier_name` on the ledger).
    pub name: String,
    /// Hashed password.
    pub password_hash: String,
    /// Supplier URL (`supplier_url` on the ledger).
    pub url: String,
    /// Parts supplied, in append order.
    pub parts: Vec<Part>,
}

impl From<SupplierRecord> for SupplierView {
    fn from(record: SupplierRecord) -> Self {
        Self {
            uuid: record.supplier_id,
            short_id: record.short_id,
            name: record.supplier_name,
            password_hash: record.password_hash,
            url: record.supplier_url,
            parts: record.parts,
        }
    }
}
