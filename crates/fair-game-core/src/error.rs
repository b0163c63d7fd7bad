//! Error types shared across the crate.

use crate::moves::MoveSetError;
use thiserror::Error;

/// Errors surfaced by the game core
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] MoveSetError),

    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    #[error("Must be a correct value: {0}")]
    InvalidSelection(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Unknown digest algorithm: {0}")]
    UnknownDigest(String),

    #[error("Invalid receipt: {0}")]
    InvalidReceipt(#[from] serde_json::Error),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
