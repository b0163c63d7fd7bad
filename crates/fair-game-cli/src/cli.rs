//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use fair_game_core::{DigestAlgorithm, SecretKey};

/// Provably fair rock-paper-scissors over any odd list of moves.
///
/// The computer commits to its move with an HMAC before you choose, then
/// reveals the key so you can check it did not cheat.
#[derive(Debug, Parser)]
#[command(name = "fair-game", version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Move names in cycle order: odd count, at least 3, no repeats
    #[arg(value_name = "MOVE")]
    pub moves: Vec<String>,

    /// Hash function under the HMAC
    #[arg(long, env = "FAIR_GAME_DIGEST", default_value_t = DigestAlgorithm::Sha3_256)]
    pub digest: DigestAlgorithm,

    /// Also print each round receipt as a JSON line
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a revealed key against a published commitment
    Verify(VerifyArgs),
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Revealed HMAC key (64 hex chars)
    #[arg(long, required_unless_present = "receipt")]
    pub key: Option<SecretKey>,

    /// Computer move name the key should authenticate
    #[arg(long = "move", value_name = "MOVE", required_unless_present = "receipt")]
    pub move_name: Option<String>,

    /// Commitment shown before the move (64 hex chars)
    #[arg(long, required_unless_present = "receipt")]
    pub commitment: Option<String>,

    /// Hash function under the HMAC
    #[arg(long, env = "FAIR_GAME_DIGEST", default_value_t = DigestAlgorithm::Sha3_256)]
    pub digest: DigestAlgorithm,

    /// Round receipt as printed by --json, instead of the flags above
    #[arg(long, conflicts_with_all = ["key", "move_name", "commitment"])]
    pub receipt: Option<String>,
}
