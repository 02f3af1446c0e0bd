//! The supplier transaction handler.
//!
//! States are implicit in the stored record's presence or absence; the
//! machine has exactly two transitions, `create` and `add-part`. The
//! descriptive fields can only be set at create; no operation updates or
//! deletes them.

use tracing::{debug, info};

use supplier_protocol::addressing::supplier_address;
use supplier_protocol::family;
use supplier_protocol::payload::{SupplierAction, SupplierPayload};
use supplier_protocol::record::SupplierRecord;

use crate::errors::ApplyError;
use crate::ports::StateStore;

/// Transaction handler for the `supplier` family.
///
/// The namespace prefix is fixed at construction and passed in explicitly;
/// there is no process-wide mutable configuration.
pub struct SupplierTransactionHandler {
    namespace_prefix: String,
}

impl SupplierTransactionHandler {
    /// Create a handler scoped to the given namespace prefix.
    pub fn new(namespace_prefix: impl Into<String>) -> Self {
        Self {
            namespace_prefix: namespace_prefix.into(),
        }
    }

    /// Registered family name.
    pub fn family_name(&self) -> &'static str {
        family::FAMILY_NAME
    }

    /// Family versions this handler accepts.
    pub fn family_versions(&self) -> Vec<String> {
        vec![family::FAMILY_VERSION.to_string()]
    }

    /// Payload encodings this handler accepts.
    pub fn encodings(&self) -> Vec<String> {
        vec![family::PAYLOAD_ENCODING.to_string()]
    }

    /// State namespaces this handler owns.
    pub fn namespaces(&self) -> Vec<String> {
        vec![self.namespace_prefix.clone()]
    }

    /// Apply one transaction payload against the ledger state.
    ///
    /// Every precondition is checked before any write; on error the ledger
    /// discards staged writes, so a rejected transaction leaves state
    /// untouched.
    pub fn apply<S: StateStore>(&self, payload: &[u8], state: &S) -> Result<(), ApplyError> {
        let payload = SupplierPayload::from_bytes(payload)
            .map_err(|e| ApplyError::InvalidTransaction(e.to_string()))?;
        let action = validate(&payload)?;

        let address = supplier_address(&self.namespace_prefix, &payload.supplier_id);
        debug!(
            supplier_id = %payload.supplier_id,
            action = payload.action.as_str(),
            %address,
            "applying supplier transaction"
        );

        // Read prior state. A present-but-undecodable value is ledger data
        // corruption, not a validation failure.
        let existing = match state.get_state(&address)? {
            Some(bytes) => {
                let (_, record) = SupplierRecord::from_state_bytes(&bytes).map_err(|e| {
                    ApplyError::Internal(format!("failed to deserialize data at {address}: {e}"))
                })?;
                Some(record)
            }
            None => None,
        };

        let record = match action {
            SupplierAction::Create => {
                if existing.is_some() {
                    return Err(ApplyError::InvalidTransaction(format!(
                        "supplier already exists: {}",
                        payload.supplier_id
                    )));
                }
                info!(supplier_id = %payload.supplier_id, "created supplier");
                SupplierRecord::new(
                    payload.supplier_id.clone(),
                    payload.short_id.clone(),
                    payload.supplier_name.clone(),
                    payload.password_hash.clone(),
                    payload.supplier_url.clone(),
                )
            }
            SupplierAction::AddPart => {
                let mut record = existing.ok_or_else(|| {
                    ApplyError::InvalidTransaction(format!(
                        "supplier not found: {}",
                        payload.supplier_id
                    ))
                })?;
                if record.add_part(payload.part_id.clone()) {
                    info!(
                        supplier_id = %payload.supplier_id,
                        part_id = %payload.part_id,
                        "added part to supplier"
                    );
                } else {
                    debug!(
                        supplier_id = %payload.supplier_id,
                        part_id = %payload.part_id,
                        "part already present, record unchanged"
                    );
                }
                record
            }
        };

        // Write-back always occurs, including the unchanged duplicate
        // add-part case where the value is rewritten identically.
        let value = record
            .to_state_bytes()
            .map_err(|e| ApplyError::Internal(e.to_string()))?;
        state.set_state(&address, value)?;
        Ok(())
    }
}

impl Default for SupplierTransactionHandler {
    fn default() -> Self {
        Self::new(family::namespace_prefix())
    }
}

/// Field-level validation, in contract order: supplier id, then action
/// presence, then action enum membership.
fn validate(payload: &SupplierPayload) -> Result<SupplierAction, ApplyError> {
    if payload.supplier_id.is_empty() {
        return Err(ApplyError::InvalidTransaction(
            "supplier id is required".to_string(),
        ));
    }
    if payload.action.is_empty() {
        return Err(ApplyError::InvalidTransaction(
            "action is required".to_string(),
        ));
    }
    SupplierAction::parse(&payload.action).map_err(|e| ApplyError::InvalidTransaction(e.to_string()))
}
