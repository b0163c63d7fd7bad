//! Cryptographic primitives for the commit-reveal protocol.
//!
//! This module provides:
//! - SecretKey, the per-round HMAC key revealed after the user moves
//! - Commitment, the HMAC tag published before the user moves
//! - DigestAlgorithm, the hash function under the HMAC

mod commitment;
mod key;

pub use commitment::{verify_commitment, Commitment, DigestAlgorithm};
pub use key::SecretKey;

/// Hex serde helpers for fixed 32-byte values
pub(crate) mod hex32_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_hex32(&hex_str).map_err(serde::de::Error::custom)
    }
}

pub(crate) fn decode_hex32(s: &str) -> Result<[u8; 32], crate::GameError> {
    let bytes = hex::decode(s.trim()).map_err(|e| crate::GameError::InvalidHex(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(crate::GameError::InvalidHex(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        )));
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}
