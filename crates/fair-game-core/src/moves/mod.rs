//! Move sets and the cyclic outcome rule.

mod move_set;
mod outcome;

pub use move_set::{MoveIndex, MoveSet, MoveSetError, MIN_MOVES};
pub use outcome::{resolve, Outcome, OutcomeTable};
