//! Supplier record model and state value codec.
//!
//! The persisted value is not a single self-describing encoding: it is the
//! raw `supplier_id`, a `,` delimiter, and the JSON form of the record.
//! Decoding splits on the first `,` only and parses the remainder. This
//! two-part contract is preserved exactly for wire compatibility with
//! existing ledger state.

use serde::{Deserialize, Serialize};

use crate::errors::ProtocolError;

/// Reference to a part supplied by a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Opaque part identifier.
    pub part_id: String,
}

/// The persisted supplier entity.
///
/// `supplier_id` is immutable once created and is the record's primary
/// key; the descriptive fields are set at creation and never updated by
/// the current operation set. `parts` is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRecord {
    /// Primary key.
    pub supplier_id: String,
    /// Short identifier.
    pub short_id: String,
    /// Display name.
    pub supplier_name: String,
    /// Hashed password.
    pub password_hash: String,
    /// Supplier URL.
    pub supplier_url: String,
    /// Parts supplied, in append order.
    pub parts: Vec<Part>,
}

impl SupplierRecord {
    /// Build a new record with an empty parts sequence.
    pub fn new(
        supplier_id: impl Into<String>,
        short_id: impl Into<String>,
        supplier_name: impl Into<String>,
        password_hash: impl Into<String>,
        supplier_url: impl Into<String>,
    ) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            short_id: short_id.into(),
            supplier_name: supplier_name.into(),
            password_hash: password_hash.into(),
            supplier_url: supplier_url.into(),
            parts: Vec::new(),
        }
    }

    /// Whether a part with this id is already recorded.
    pub fn has_part(&self, part_id: &str) -> bool {
        self.parts.iter().any(|p| p.part_id == part_id)
    }

    /// Append a part reference unless one with the same id already exists.
    ///
    /// Returns `true` if the part was appended. Duplicate ids leave the
    /// record unchanged.
    pub fn add_part(&mut self, part_id: impl Into<String>) -> bool {
        let part_id = part_id.into();
        if self.has_part(&part_id) {
            return false;
        }
        self.parts.push(Part { part_id });
        true
    }

    /// Encode to the stored state value: `supplier_id` + `,` + JSON record.
    pub fn to_state_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let json = serde_json::to_string(self)
            .map_err(|e| ProtocolError::MalformedStateValue(e.to_string()))?;
        Ok(format!("{},{}", self.supplier_id, json).into_bytes())
    }

    /// Decode a stored state value.
    ///
    /// Splits on the first `,` to recover the raw id, then parses the
    /// remainder as JSON. Returns the leading id alongside the record.
    pub fn from_state_bytes(bytes: &[u8]) -> Result<(String, Self), ProtocolError> {
        let text = std::str::from_utf8(bytes).map_err(|_| ProtocolError::InvalidUtf8)?;
        let (stored_id, json) = text.split_once(',').ok_or_else(|| {
            ProtocolError::MalformedStateValue("missing delimiter".to_string())
        })?;
        let record: Self = serde_json::from_str(json)
            .map_err(|e| ProtocolError::MalformedStateValue(e.to_string()))?;
        Ok((stored_id.to_string(), record))
    }
}
