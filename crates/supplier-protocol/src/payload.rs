//! Transaction payload codec.
//!
//! A payload is a flat, ordered tuple of seven fields joined by `,` into a
//! single UTF-8 byte string:
//!
//! ```text
//! supplier_id,short_id,supplier_name,password_hash,supplier_url,action,part_id
//! ```
//!
//! Field position is significant and fixed; fields unused by a given action
//! are carried as empty strings rather than omitted.

use crate::errors::ProtocolError;

/// Number of fields in a serialized payload.
pub const PAYLOAD_FIELD_COUNT: usize = 7;

/// The closed set of operations the family accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierAction {
    /// Create a new supplier record.
    Create,
    /// Append one part reference to an existing record.
    AddPart,
}

impl SupplierAction {
    /// Parse an action from its wire string.
    pub fn parse(action: &str) -> Result<Self, ProtocolError> {
        match action {
            "create" => Ok(Self::Create),
            "add-part" => Ok(Self::AddPart),
            other => Err(ProtocolError::InvalidAction(other.to_string())),
        }
    }

    /// Wire string for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::AddPart => "add-part",
        }
    }
}

/// Decoded transaction payload.
///
/// `action` is kept as the raw wire string; the handler validates it
/// against [`SupplierAction`] after the field-level checks so that error
/// ordering matches the validation contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierPayload {
    /// Primary key of the supplier record.
    pub supplier_id: String,
    /// Short identifier, set at creation.
    pub short_id: String,
    /// Display name, set at creation.
    pub supplier_name: String,
    /// Hashed password, set at creation.
    pub password_hash: String,
    /// Supplier URL, set at creation.
    pub supplier_url: String,
    /// Raw action string (`create` or `add-part`).
    pub action: String,
    /// Part to append; empty for `create`.
    pub part_id: String,
}

impl SupplierPayload {
    /// Build a `create` payload from the five descriptive fields.
    pub fn create(
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
            action: SupplierAction::Create.as_str().to_string(),
            part_id: String::new(),
        }
    }

    /// Build an `add-part` payload; descriptive fields stay empty.
    pub fn add_part(supplier_id: impl Into<String>, part_id: impl Into<String>) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            short_id: String::new(),
            supplier_name: String::new(),
            password_hash: String::new(),
            supplier_url: String::new(),
            action: SupplierAction::AddPart.as_str().to_string(),
            part_id: part_id.into(),
        }
    }

    /// Decode a payload from its wire bytes.
    ///
    /// Fails with [`ProtocolError::MalformedPayload`] unless the byte
    /// string splits into exactly seven fields.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        let text = std::str::from_utf8(bytes).map_err(|_| ProtocolError::InvalidUtf8)?;
        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() != PAYLOAD_FIELD_COUNT {
            return Err(ProtocolError::MalformedPayload {
                expected: PAYLOAD_FIELD_COUNT,
                actual: fields.len(),
            });
        }
        Ok(Self {
            supplier_id: fields[0].to_string(),
            short_id: fields[1].to_string(),
            supplier_name: fields[2].to_string(),
            password_hash: fields[3].to_string(),
            supplier_url: fields[4].to_string(),
            action: fields[5].to_string(),
            part_id: fields[6].to_string(),
        })
    }

    /// Encode the payload to its wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        [
            self.supplier_id.as_str(),
            self.short_id.as_str(),
            self.supplier_name.as_str(),
            self.password_hash.as_str(),
            self.supplier_url.as_str(),
            self.action.as_str(),
            self.part_id.as_str(),
        ]
        .join(",")
        .into_bytes()
    }
}
