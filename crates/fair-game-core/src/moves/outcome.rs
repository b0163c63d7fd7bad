//! Cyclic outcome rule for an odd number of moves.
//!
//! Moves sit on a cycle in the order given. With `half = N / 2`, the mover at
//! `u` wins when the opponent at `c` lies 1..=half steps ahead of it:
//!
//! ```text
//! diff = (c + N - u) % N
//! diff == 0      => Draw
//! diff <= half   => Win
//! otherwise      => Lose
//! ```
//!
//! Oddness makes the split exact, so every distinct pair has one winner.

use super::{MoveIndex, MoveSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a round from the user's (row mover's) point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    Win,
    Lose,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Draw => "Draw",
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        }
    }

    /// Banner printed after a round
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Draw => "Draw!",
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
        }
    }

    /// The same round seen from the other side
    pub fn flip(&self) -> Outcome {
        match self {
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide the round for `user` against `computer`.
///
/// Both indices must come from `moves`.
pub fn resolve(moves: &MoveSet, user: MoveIndex, computer: MoveIndex) -> Outcome {
    let n = moves.len();
    debug_assert!(user.get() < n && computer.get() < n);

    let diff = (computer.get() + n - user.get()) % n;
    if diff == 0 {
        Outcome::Draw
    } else if diff <= moves.half() {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// N x N table where cell (row, col) is `resolve(row, col)`
#[derive(Clone, Debug)]
pub struct OutcomeTable<'a> {
    moves: &'a MoveSet,
    cells: Vec<Vec<Outcome>>,
}

impl<'a> OutcomeTable<'a> {
    pub fn build(moves: &'a MoveSet) -> Self {
        let cells = moves
            .indices()
            .map(|row| moves.indices().map(|col| resolve(moves, row, col)).collect())
            .collect();
        Self { moves, cells }
    }

    pub fn moves(&self) -> &'a MoveSet {
        self.moves
    }

    pub fn cell(&self, row: MoveIndex, col: MoveIndex) -> Outcome {
        self.cells[row.get()][col.get()]
    }

    /// Rows labelled with the row move's name
    pub fn rows(&self) -> impl Iterator<Item = (&'a str, &[Outcome])> + '_ {
        self.moves
            .iter()
            .zip(&self.cells)
            .map(|((_, name), row)| (name, row.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> MoveSet {
        MoveSet::new(["rock", "paper", "scissors"]).unwrap()
    }

    fn sets() -> Vec<MoveSet> {
        vec![
            classic(),
            MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap(),
            MoveSet::new((0..9).map(|i| format!("m{}", i))).unwrap(),
        ]
    }

    #[test]
    fn test_literal_formula_for_classic_order() {
        let moves = classic();
        let idx = |i| moves.index(i).unwrap();

        // diff = (1 + 3 - 0) % 3 = 1 <= half = 1
        assert_eq!(resolve(&moves, idx(0), idx(1)), Outcome::Win);
        // diff = (2 + 3 - 0) % 3 = 2 > half
        assert_eq!(resolve(&moves, idx(0), idx(2)), Outcome::Lose);
        assert_eq!(resolve(&moves, idx(1), idx(0)), Outcome::Lose);
        assert_eq!(resolve(&moves, idx(2), idx(0)), Outcome::Win);
    }

    #[test]
    fn test_boundary_at_half() {
        let moves = MoveSet::new(["a", "b", "c", "d", "e"]).unwrap();
        let idx = |i| moves.index(i).unwrap();

        assert_eq!(resolve(&moves, idx(0), idx(2)), Outcome::Win);
        assert_eq!(resolve(&moves, idx(0), idx(3)), Outcome::Lose);
    }

    #[test]
    fn test_same_move_draws() {
        for moves in sets() {
            for i in moves.indices() {
                assert_eq!(resolve(&moves, i, i), Outcome::Draw);
            }
        }
    }

    #[test]
    fn test_swapping_sides_flips_result() {
        for moves in sets() {
            for i in moves.indices() {
                for j in moves.indices().filter(|j| *j != i) {
                    let forward = resolve(&moves, i, j);
                    assert_ne!(forward, Outcome::Draw);
                    assert_eq!(resolve(&moves, j, i), forward.flip());
                }
            }
        }
    }

    #[test]
    fn test_rotation_invariance() {
        for moves in sets() {
            let n = moves.len();
            for k in 0..n {
                for i in 0..n {
                    for j in 0..n {
                        let base =
                            resolve(&moves, moves.index(i).unwrap(), moves.index(j).unwrap());
                        let rotated = resolve(
                            &moves,
                            moves.index((i + k) % n).unwrap(),
                            moves.index((j + k) % n).unwrap(),
                        );
                        assert_eq!(base, rotated);
                    }
                }
            }
        }
    }

    #[test]
    fn test_each_move_beats_exactly_half() {
        for moves in sets() {
            for i in moves.indices() {
                let wins = moves
                    .indices()
                    .filter(|j| resolve(&moves, i, *j) == Outcome::Win)
                    .count();
                assert_eq!(wins, moves.half());
            }
        }
    }

    #[test]
    fn test_table_for_three_moves() {
        let moves = classic();
        let table = OutcomeTable::build(&moves);

        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;
        for i in moves.indices() {
            assert_eq!(table.cell(i, i), Outcome::Draw);
            for j in moves.indices() {
                assert_eq!(table.cell(i, j), table.cell(j, i).flip());
                match table.cell(i, j) {
                    Outcome::Win => wins += 1,
                    Outcome::Lose => losses += 1,
                    Outcome::Draw => draws += 1,
                }
            }
        }

        assert_eq!(wins, 3);
        assert_eq!(losses, 3);
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_table_rows_are_labelled() {
        let moves = classic();
        let table = OutcomeTable::build(&moves);
        let rows: Vec<_> = table.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0, "rock");
        assert_eq!(rows[0].1, &[Outcome::Draw, Outcome::Win, Outcome::Lose]);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Win.message(), "You win!");
        assert_eq!(Outcome::Lose.message(), "You lose!");
        assert_eq!(Outcome::Draw.message(), "Draw!");
        assert_eq!(Outcome::Win.to_string(), "Win");
    }
}
