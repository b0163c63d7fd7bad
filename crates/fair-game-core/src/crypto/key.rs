//! Per-round HMAC key.

use super::hex32_serde;
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 256-bit secret used as the HMAC key for one round
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(#[serde(with = "hex32_serde")] [u8; 32]);

impl SecretKey {
    /// Key length in bytes
    pub const LEN: usize = 32;

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for SecretKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::decode_hex32(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_hex_roundtrip() {
        let key = SecretKey::from_bytes([0xab; 32]);
        let parsed: SecretKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
        assert_eq!(key.to_string().len(), 64);
    }

    #[test]
    fn test_debug_does_not_leak_full_key() {
        let key = SecretKey::from_bytes([0x11; 32]);
        let debug = format!("{:?}", key);
        assert_eq!(debug, "SecretKey(11111111..)");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(
            "abcd".parse::<SecretKey>(),
            Err(GameError::InvalidHex(_))
        ));
        assert!(matches!(
            "zz".repeat(32).parse::<SecretKey>(),
            Err(GameError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let key = SecretKey::from_bytes([0x01; 32]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        let back: SecretKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
