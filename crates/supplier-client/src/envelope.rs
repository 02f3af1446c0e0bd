//! Transaction and batch envelope construction.
//!
//! A submitted operation travels as a signed transaction wrapped in a
//! signed batch. The header binds the signer identity, family identity,
//! declared input/output address set, a SHA-512 payload digest, and a
//! fresh nonce; the batch header references the transaction by its header
//! signature. Header bytes are the compact binary (bincode) image of the
//! header struct, and that exact byte string is what gets signed.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use supplier_protocol::addressing::supplier_address;
use supplier_protocol::family;
use supplier_protocol::payload::SupplierPayload;

use crate::errors::ClientError;
use crate::signing::Signer;

// =============================================================================
// ENVELOPE TYPES
// =============================================================================

/// Header binding one transaction to its signer and declared state access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionHeader {
    /// Hex public key of the transaction signer.
    pub signer_public_key: String,
    /// Transaction family name.
    pub family_name: String,
    /// Transaction family version.
    pub family_version: String,
    /// Addresses the handler may read.
    pub inputs: Vec<String>,
    /// Addresses the handler may write.
    pub outputs: Vec<String>,
    /// Transaction ids this transaction depends on.
    pub dependencies: Vec<String>,
    /// Advertised payload encoding.
    pub payload_encoding: String,
    /// SHA-512 hex digest of the payload bytes.
    pub payload_sha512: String,
    /// Hex public key of the batcher.
    pub batcher_public_key: String,
    /// Fresh per-transaction nonce.
    pub nonce: String,
}

/// A signed transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Serialized [`TransactionHeader`] bytes (the signed image).
    pub header: Vec<u8>,
    /// Operation payload bytes.
    pub payload: Vec<u8>,
    /// Hex signature over the header bytes.
    pub header_signature: String,
}

/// Header binding a batch to its member transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchHeader {
    /// Hex public key of the batch signer.
    pub signer_public_key: String,
    /// Header signatures of the member transactions, in order.
    pub transaction_ids: Vec<String>,
}

/// A signed batch of transactions, applied together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Serialized [`BatchHeader`] bytes (the signed image).
    pub header: Vec<u8>,
    /// Member transactions.
    pub transactions: Vec<Transaction>,
    /// Hex signature over the header bytes.
    pub header_signature: String,
}

/// Submission envelope: one or more batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchList {
    /// Batches to submit.
    pub batches: Vec<Batch>,
}

impl BatchList {
    /// Serialized form POSTed to the gateway.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ClientError> {
        bincode::serialize(self).map_err(|e| ClientError::Serialization(e.to_string()))
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// SHA-512 digest as lowercase hex.
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(Sha512::digest(data))
}

fn fresh_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Build and sign a transaction for one supplier operation.
///
/// The declared input and output sets are both exactly the address derived
/// from the payload's `supplier_id`; the handler may touch nothing else.
pub fn build_transaction(
    signer: &Signer,
    payload: &SupplierPayload,
) -> Result<Transaction, ClientError> {
    let payload_bytes = payload.to_bytes();
    let address = supplier_address(&family::namespace_prefix(), &payload.supplier_id);
    let public_key = signer.public_key_hex();

    let header = TransactionHeader {
        signer_public_key: public_key.clone(),
        family_name: family::FAMILY_NAME.to_string(),
        family_version: family::FAMILY_VERSION.to_string(),
        inputs: vec![address.clone()],
        outputs: vec![address],
        dependencies: Vec::new(),
        payload_encoding: family::PAYLOAD_ENCODING.to_string(),
        payload_sha512: sha512_hex(&payload_bytes),
        batcher_public_key: public_key,
        nonce: fresh_nonce(),
    };

    let header_bytes =
        bincode::serialize(&header).map_err(|e| ClientError::Serialization(e.to_string()))?;
    let header_signature = signer.sign_hex(&header_bytes);

    Ok(Transaction {
        header: header_bytes,
        payload: payload_bytes,
        header_signature,
    })
}

/// Wrap signed transactions into a signed single-batch list.
pub fn build_batch_list(
    signer: &Signer,
    transactions: Vec<Transaction>,
) -> Result<BatchList, ClientError> {
    let header = BatchHeader {
        signer_public_key: signer.public_key_hex(),
        transaction_ids: transactions
            .iter()
            .map(|t| t.header_signature.clone())
            .collect(),
    };

    let header_bytes =
        bincode::serialize(&header).map_err(|e| ClientError::Serialization(e.to_string()))?;
    let header_signature = signer.sign_hex(&header_bytes);

    Ok(BatchList {
        batches: vec![Batch {
            header: header_bytes,
            transactions,
            header_signature,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> Signer {
        Signer::from_hex(&"ab".repeat(32)).unwrap()
    }

    #[test]
    fn test_transaction_binds_payload_digest() {
        let payload = SupplierPayload::create("S1", "s1", "Acme", "h4sh", "http://acme.example");
        let tx = build_transaction(&signer(), &payload).unwrap();

        let header: TransactionHeader = bincode::deserialize(&tx.header).unwrap();
        assert_eq!(header.family_name, "supplier");
        assert_eq!(header.family_version, "1.0");
        assert_eq!(header.payload_sha512, sha512_hex(&tx.payload));
    }

    #[test]
    fn test_inputs_and_outputs_are_the_derived_address() {
        let payload = SupplierPayload::add_part("S1", "P1");
        let tx = build_transaction(&signer(), &payload).unwrap();

        let header: TransactionHeader = bincode::deserialize(&tx.header).unwrap();
        let expected =
            supplier_address(&supplier_protocol::family::namespace_prefix(), "S1");
        assert_eq!(header.inputs, vec![expected.clone()]);
        assert_eq!(header.outputs, vec![expected]);
    }

    #[test]
    fn test_nonce_is_fresh_per_transaction() {
        let payload = SupplierPayload::add_part("S1", "P1");
        let s = signer();
        let a: TransactionHeader =
            bincode::deserialize(&build_transaction(&s, &payload).unwrap().header).unwrap();
        let b: TransactionHeader =
            bincode::deserialize(&build_transaction(&s, &payload).unwrap().header).unwrap();
        assert_ne!(a.nonce, b.nonce);
    }

    #[test]
    fn test_batch_references_transaction_ids() {
        let s = signer();
        let payload = SupplierPayload::create("S1", "s1", "Acme", "h4sh", "url");
        let tx = build_transaction(&s, &payload).unwrap();
        let tx_id = tx.header_signature.clone();

        let batch_list = build_batch_list(&s, vec![tx]).unwrap();
        assert_eq!(batch_list.batches.len(), 1);

        let header: BatchHeader =
            bincode::deserialize(&batch_list.batches[0].header).unwrap();
        assert_eq!(header.transaction_ids, vec![tx_id]);
    }

    #[test]
    fn test_batch_list_serializes_round_trip() {
        let s = signer();
        let payload = SupplierPayload::add_part("S1", "P1");
        let batch_list =
            build_batch_list(&s, vec![build_transaction(&s, &payload).unwrap()]).unwrap();

        let bytes = batch_list.to_bytes().unwrap();
        let decoded: BatchList = bincode::deserialize(&bytes).unwrap();
        assert_eq!(
            decoded.batches[0].header_signature,
            batch_list.batches[0].header_signature
        );
    }
}
