//! HMAC commitment over the computer's move name.

use super::{hex32_serde, SecretKey};
use crate::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::Sha3_256;
use std::fmt;
use std::str::FromStr;

/// Hash function underneath the HMAC
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    #[default]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[serde(rename = "sha256")]
    Sha256,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha3_256 => "sha3-256",
            DigestAlgorithm::Sha256 => "sha256",
        }
    }

    /// HMAC tag of `message` under `key`
    fn mac(&self, key: &SecretKey, message: &[u8]) -> [u8; 32] {
        match self {
            DigestAlgorithm::Sha3_256 => keyed::<Hmac<Sha3_256>>(key, message),
            DigestAlgorithm::Sha256 => keyed::<Hmac<Sha256>>(key, message),
        }
    }

    /// Constant-time check of `tag` against the HMAC of `message`
    fn check(&self, key: &SecretKey, message: &[u8], tag: &[u8; 32]) -> bool {
        match self {
            DigestAlgorithm::Sha3_256 => keyed_check::<Hmac<Sha3_256>>(key, message, tag),
            DigestAlgorithm::Sha256 => keyed_check::<Hmac<Sha256>>(key, message, tag),
        }
    }
}

fn new_mac<M: Mac + hmac::digest::KeyInit>(key: &SecretKey, message: &[u8]) -> M {
    let mut mac = <M as hmac::digest::KeyInit>::new_from_slice(key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(message);
    mac
}

fn keyed<M: Mac + hmac::digest::KeyInit>(key: &SecretKey, message: &[u8]) -> [u8; 32] {
    let tag = new_mac::<M>(key, message).finalize().into_bytes();
    let mut out = [0u8; 32];
    out.copy_from_slice(&tag[..32]);
    out
}

fn keyed_check<M: Mac + hmac::digest::KeyInit>(
    key: &SecretKey,
    message: &[u8],
    tag: &[u8; 32],
) -> bool {
    new_mac::<M>(key, message).verify_slice(tag).is_ok()
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha3-256" | "sha3_256" | "sha3" => Ok(DigestAlgorithm::Sha3_256),
            "sha256" | "sha-256" | "sha2" => Ok(DigestAlgorithm::Sha256),
            other => Err(GameError::UnknownDigest(other.to_string())),
        }
    }
}

/// Commitment = HMAC(key, move_name)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment {
    algorithm: DigestAlgorithm,
    #[serde(with = "hex32_serde")]
    tag: [u8; 32],
}

impl Commitment {
    /// Commit to `move_name` under `key`
    pub fn new(algorithm: DigestAlgorithm, key: &SecretKey, move_name: &str) -> Self {
        Self {
            algorithm,
            tag: algorithm.mac(key, move_name.as_bytes()),
        }
    }

    /// Rebuild a published commitment from its hex digest
    pub fn from_hex(algorithm: DigestAlgorithm, hex_str: &str) -> Result<Self, GameError> {
        Ok(Self {
            algorithm,
            tag: super::decode_hex32(hex_str)?,
        })
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Get the underlying digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.tag
    }

    /// Verify that the given key and move name produce this commitment
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        self.algorithm.check(key, move_name.as_bytes(), &self.tag)
    }
}

/// Recompute a commitment from a revealed key and compare it with the published digest
pub fn verify_commitment(
    algorithm: DigestAlgorithm,
    key: &SecretKey,
    move_name: &str,
    commitment_hex: &str,
) -> Result<bool, GameError> {
    let published = Commitment::from_hex(algorithm, commitment_hex)?;
    Ok(published.verify(key, move_name))
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Commitment({}:{})",
            self.algorithm,
            hex::encode(&self.tag[..8])
        )
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> SecretKey {
        SecretKey::from_bytes([byte; 32])
    }

    #[test]
    fn test_commitment_verification() {
        let key = key(7);
        let commitment = Commitment::new(DigestAlgorithm::Sha3_256, &key, "rock");

        assert!(commitment.verify(&key, "rock"));
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let a = Commitment::new(DigestAlgorithm::Sha3_256, &key(3), "lizard");
        let b = Commitment::new(DigestAlgorithm::Sha3_256, &key(3), "lizard");

        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_hmac_sha256_known_vector() {
        // A zero key pads to the same block as an empty key, so this is the
        // well-known HMAC-SHA256("", "") value.
        let commitment = Commitment::new(DigestAlgorithm::Sha256, &key(0), "");
        assert_eq!(
            commitment.to_string(),
            "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"
        );
    }

    #[test]
    fn test_hmac_sha3_known_vector() {
        let commitment = Commitment::new(DigestAlgorithm::Sha3_256, &key(7), "rock");
        assert_eq!(
            commitment.to_string(),
            "c45f59d705b449861f0e5ffd688d5088ec1af5f1ca2f04af4e53bd6b9babedb5"
        );
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let key = key(1);
        let moves = ["rock", "paper", "scissors", "lizard", "spock"];
        let digests: std::collections::HashSet<_> = moves
            .iter()
            .map(|m| Commitment::new(DigestAlgorithm::Sha3_256, &key, m))
            .collect();

        assert_eq!(digests.len(), moves.len());
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let c1 = Commitment::new(DigestAlgorithm::Sha3_256, &key(1), "rock");
        let c2 = Commitment::new(DigestAlgorithm::Sha3_256, &key(2), "rock");

        assert_ne!(c1, c2);
    }

    #[test]
    fn test_algorithms_disagree() {
        let c1 = Commitment::new(DigestAlgorithm::Sha3_256, &key(1), "rock");
        let c2 = Commitment::new(DigestAlgorithm::Sha256, &key(1), "rock");

        assert_ne!(c1.as_bytes(), c2.as_bytes());
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = key(9);
        let commitment = Commitment::new(DigestAlgorithm::Sha3_256, &key, "rock");

        assert!(!commitment.verify(&key, "paper"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let commitment = Commitment::new(DigestAlgorithm::Sha3_256, &key(1), "rock");

        assert!(!commitment.verify(&key(2), "rock"));
    }

    #[test]
    fn test_verify_from_published_hex() {
        let key = key(5);
        let published = Commitment::new(DigestAlgorithm::Sha3_256, &key, "spock").to_string();

        assert!(verify_commitment(DigestAlgorithm::Sha3_256, &key, "spock", &published).unwrap());
        assert!(!verify_commitment(DigestAlgorithm::Sha3_256, &key, "rock", &published).unwrap());
        assert!(verify_commitment(DigestAlgorithm::Sha3_256, &key, "spock", "nothex").is_err());
    }

    #[test]
    fn test_digest_algorithm_parse() {
        assert_eq!("sha3-256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha3_256);
        assert_eq!("SHA256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
        assert!("md5".parse::<DigestAlgorithm>().is_err());
        assert_eq!(DigestAlgorithm::default(), DigestAlgorithm::Sha3_256);
    }
}
