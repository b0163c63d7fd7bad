//! Record of a finished round, including the revealed key.

use crate::crypto::{Commitment, SecretKey};
use crate::moves::Outcome;
use serde::{Deserialize, Serialize};

/// Everything a user needs to check a round after the fact
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReceipt {
    pub round: u64,
    pub user_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    pub commitment: Commitment,
    pub key: SecretKey,
}

impl RoundReceipt {
    /// Recompute HMAC(key, computer_move) and compare with the commitment
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, &self.computer_move)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
