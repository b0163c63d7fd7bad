//! Fair Game Core Library
//!
//! Provably fair rock-paper-scissors over any odd set of move names.
//! The computer commits to its move with an HMAC before the user picks and
//! reveals the key afterwards so the commitment can be checked.

pub mod crypto;
pub mod error;
pub mod moves;
pub mod protocol;
pub mod rng;
pub mod session;

pub use crypto::{verify_commitment, Commitment, DigestAlgorithm, SecretKey};
pub use error::GameError;
pub use moves::{resolve, MoveIndex, MoveSet, MoveSetError, Outcome, OutcomeTable};
pub use protocol::{CommitmentEngine, CommittedRound, RoundReceipt};
pub use rng::{OsRandom, RandomSource, RngSource};
pub use session::{Console, MemoryConsole, Selection, Session, SessionEvent, SessionSummary};
