//! Commitment engine: key generation, computer move, HMAC commitment.
//!
//! A round moves through two phases. `begin_round` draws a fresh key and the
//! computer's move and publishes only the commitment. The key is released by
//! consuming the `CommittedRound`, either with the user's move (`play`) or
//! without one (`reveal`). The type system keeps the key out of reach while
//! the user is still choosing.

use super::RoundReceipt;
use crate::crypto::{Commitment, DigestAlgorithm, SecretKey};
use crate::moves::{resolve, MoveIndex, MoveSet};
use crate::rng::RandomSource;
use crate::GameError;
use tracing::debug;

pub struct CommitmentEngine<R> {
    rng: R,
    algorithm: DigestAlgorithm,
    rounds_started: u64,
}

impl<R: RandomSource> CommitmentEngine<R> {
    pub fn new(rng: R, algorithm: DigestAlgorithm) -> Self {
        Self {
            rng,
            algorithm,
            rounds_started: 0,
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Fresh 256-bit key; fails only if the entropy source does
    pub fn generate_key(&mut self) -> Result<SecretKey, GameError> {
        let mut bytes = [0u8; SecretKey::LEN];
        self.rng.fill_key(&mut bytes)?;
        Ok(SecretKey::from_bytes(bytes))
    }

    /// Uniform choice over the move set
    pub fn choose_move(&mut self, moves: &MoveSet) -> MoveIndex {
        moves.index_wrapping(self.rng.pick(moves.len()))
    }

    pub fn commit(&self, key: &SecretKey, move_name: &str) -> Commitment {
        Commitment::new(self.algorithm, key, move_name)
    }

    /// Start a round: key, computer move, then commitment
    pub fn begin_round<'m>(
        &mut self,
        moves: &'m MoveSet,
    ) -> Result<CommittedRound<'m>, GameError> {
        let key = self.generate_key()?;
        let computer = self.choose_move(moves);
        let commitment = self.commit(&key, moves.name(computer));
        self.rounds_started += 1;

        debug!(round = self.rounds_started, %commitment, "Committed to computer move");

        Ok(CommittedRound {
            number: self.rounds_started,
            moves,
            computer,
            key,
            commitment,
        })
    }
}

/// A round whose commitment is public and whose key is still sealed
pub struct CommittedRound<'m> {
    number: u64,
    moves: &'m MoveSet,
    computer: MoveIndex,
    key: SecretKey,
    commitment: Commitment,
}

impl<'m> CommittedRound<'m> {
    /// 1-based round counter within the engine's lifetime
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The value to publish before asking for the user's move
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn moves(&self) -> &'m MoveSet {
        self.moves
    }

    /// Resolve against the user's move and reveal the key
    pub fn play(self, user: MoveIndex) -> RoundReceipt {
        let outcome = resolve(self.moves, user, self.computer);
        RoundReceipt {
            round: self.number,
            user_move: self.moves.name(user).to_string(),
            computer_move: self.moves.name(self.computer).to_string(),
            outcome,
            commitment: self.commitment,
            key: self.key,
        }
    }

    /// Give up the round and hand back the key
    pub fn reveal(self) -> SecretKey {
        self.key
    }
}
