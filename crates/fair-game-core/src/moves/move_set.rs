//! Validated, immutable list of move names.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Smallest playable move count
pub const MIN_MOVES: usize = 3;

/// Reasons a move list is rejected at startup
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetError {
    #[error("Moves should not be repeated: \"{name}\" appears more than once")]
    Duplicate { name: String },

    #[error("Too short, must be >= 3 moves (got {len})")]
    TooShort { len: usize },

    #[error("Must be an odd number of moves (got {len})")]
    EvenLength { len: usize },
}

/// Position of a move inside the `MoveSet` it was taken from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MoveIndex(usize);

impl MoveIndex {
    /// Zero-based position
    pub fn get(&self) -> usize {
        self.0
    }

    /// One-based position, as shown in the menu
    pub fn position(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, duplicate-free, odd-length list of move names (N >= 3)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and freeze a move list.
    ///
    /// Rules are checked in a fixed order and only the first failure is
    /// reported: duplicates, then the minimum length, then oddness.
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::Duplicate { name: name.clone() });
            }
        }
        if names.len() < MIN_MOVES {
            return Err(MoveSetError::TooShort { len: names.len() });
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenLength { len: names.len() });
        }

        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated set; kept for the usual `len` pairing
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of moves each move beats: N / 2 in integer division
    pub fn half(&self) -> usize {
        self.names.len() / 2
    }

    /// Zero-based index, if in range
    pub fn index(&self, i: usize) -> Option<MoveIndex> {
        (i < self.names.len()).then_some(MoveIndex(i))
    }

    /// Index for an arbitrary draw, reduced into range
    pub(crate) fn index_wrapping(&self, i: usize) -> MoveIndex {
        MoveIndex(i % self.names.len())
    }

    /// One-based menu position, if in range
    pub fn from_position(&self, position: usize) -> Option<MoveIndex> {
        position.checked_sub(1).and_then(|i| self.index(i))
    }

    /// Index of a move by name
    pub fn position_of(&self, name: &str) -> Option<MoveIndex> {
        self.names.iter().position(|n| n == name).map(MoveIndex)
    }

    /// Name of the move at `idx`
    ///
    /// # Panics
    ///
    /// Panics if `idx` came from a larger move set.
    pub fn name(&self, idx: MoveIndex) -> &str {
        &self.names[idx.0]
    }

    /// All indices in order
    pub fn indices(&self) -> impl Iterator<Item = MoveIndex> + '_ {
        (0..self.names.len()).map(MoveIndex)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoveIndex, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (MoveIndex(i), name.as_str()))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
