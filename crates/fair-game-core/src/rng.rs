//! Randomness capability used by the commitment engine.
//!
//! Production code draws keys from the operating system; tests plug in a
//! seeded generator so keys, moves and commitments are reproducible.

use crate::GameError;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Source of key material and uniform move choices
pub trait RandomSource {
    /// Fill a fresh 32-byte key
    fn fill_key(&mut self, buf: &mut [u8; 32]) -> Result<(), GameError>;

    /// Uniform index in `0..n`; `n` must be non-zero
    fn pick(&mut self, n: usize) -> usize;
}

/// Operating-system entropy for keys, thread-local CSPRNG for move choice
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_key(&mut self, buf: &mut [u8; 32]) -> Result<(), GameError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| GameError::Entropy(e.to_string()))
    }

    fn pick(&mut self, n: usize) -> usize {
        rand::thread_rng().gen_range(0..n)
    }
}

/// Adapter over any cryptographic `rand` generator
#[derive(Clone, Debug)]
pub struct RngSource<R>(R);

impl<R: RngCore + CryptoRng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: RngCore + CryptoRng> RandomSource for RngSource<R> {
    fn fill_key(&mut self, buf: &mut [u8; 32]) -> Result<(), GameError> {
        self.0
            .try_fill_bytes(buf)
            .map_err(|e| GameError::Entropy(e.to_string()))
    }

    fn pick(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}
