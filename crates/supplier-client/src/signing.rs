//! Transaction signing context.
//!
//! Signatures use ECDSA over secp256k1 with RFC 6979 deterministic nonces.
//! Each client invocation constructs its own signer from a key file; no
//! signing state is shared between invocations.

use std::path::{Path, PathBuf};

use k256::ecdsa::{signature::Signer as _, Signature, SigningKey};
use zeroize::Zeroize;

use crate::errors::ClientError;

/// secp256k1 signer for transaction and batch headers.
#[derive(Debug)]
pub struct Signer {
    signing_key: SigningKey,
}

impl Signer {
    /// Parse a signer from a hex-encoded 32-byte private key.
    pub fn from_hex(key_hex: &str) -> Result<Self, ClientError> {
        let mut bytes = hex::decode(key_hex.trim())
            .map_err(|e| ClientError::InvalidKey(e.to_string()))?;
        if bytes.len() != 32 {
            bytes.zeroize();
            return Err(ClientError::InvalidKey(format!(
                "expected 32 key bytes, got {}",
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidKey(e.to_string()))?;
        bytes.zeroize();
        Ok(Self { signing_key })
    }

    /// Load a signer from a key file holding the hex private key.
    pub fn from_key_file(path: &Path) -> Result<Self, ClientError> {
        let key_hex = std::fs::read_to_string(path).map_err(|source| ClientError::KeyFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_hex(&key_hex)
    }

    /// Generate a fresh random signer.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Compressed SEC1 public key, hex encoded (66 chars).
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_sec1_bytes())
    }

    /// Sign a message and return the 64-byte r||s signature as hex.
    pub fn sign_hex(&self, message: &[u8]) -> String {
        let signature: Signature = self.signing_key.sign(message);
        hex::encode(signature.to_bytes())
    }
}

impl Drop for Signer {
    fn drop(&mut self) {
        // Zeroize secret key material
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}

/// Resolve the default key file: `<key_dir>/<username>.priv`, with the
/// directory defaulting to `~/.sawtooth/keys` and the username to `$USER`.
pub fn default_key_file(username: Option<&str>, key_dir: Option<&Path>) -> PathBuf {
    let username = username
        .map(str::to_string)
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "unknown".to_string());
    let key_dir = key_dir.map(Path::to_path_buf).unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Path::new(&home).join(".sawtooth").join("keys")
    });
    key_dir.join(format!("{username}.priv"))
}
