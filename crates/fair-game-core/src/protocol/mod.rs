//! Commit-reveal round protocol.

mod engine;
mod receipt;

pub use engine::{CommitmentEngine, CommittedRound};
pub use receipt::RoundReceipt;
