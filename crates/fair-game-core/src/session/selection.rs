//! Parsing of one line of user input.

use crate::moves::{MoveIndex, MoveSet};
use crate::GameError;

/// What the user asked for at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A real move, by index into the move set
    Move(MoveIndex),
    /// Show the outcome table; does not use up the round
    Help,
    /// Leave the game
    Quit,
}

impl Selection {
    pub const QUIT: &'static str = "0";
    pub const HELP: &'static str = "?";

    /// Parse a prompt answer: `0` quits, `?` asks for help, `1..=N` picks a move.
    pub fn parse(input: &str, moves: &MoveSet) -> Result<Self, GameError> {
        let input = input.trim();
        match input {
            Self::QUIT => Ok(Selection::Quit),
            Self::HELP => Ok(Selection::Help),
            _ => input
                .parse::<usize>()
                .ok()
                .and_then(|position| moves.from_position(position))
                .map(Selection::Move)
                .ok_or_else(|| GameError::InvalidSelection(input.to_string())),
        }
    }
}
