//! Interactive game loop.
//!
//! One round is live at a time. Its commitment is shown before the prompt,
//! help requests and bad answers re-prompt inside the same round, and the key
//! is only released together with the resolved outcome.

mod console;
mod selection;

pub use console::{Console, MemoryConsole};
pub use selection::Selection;

use crate::crypto::Commitment;
use crate::moves::{MoveSet, Outcome, OutcomeTable};
use crate::protocol::{CommitmentEngine, RoundReceipt};
use crate::rng::RandomSource;
use crate::GameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Something the session wants shown to the user
#[derive(Debug)]
pub enum SessionEvent<'a> {
    /// Published before the user is asked for a move
    Commitment {
        round: u64,
        commitment: &'a Commitment,
    },
    /// Available moves and the sentinels
    Menu(&'a MoveSet),
    /// Answer that was neither a move nor a sentinel
    InvalidSelection(&'a str),
    Table(&'a OutcomeTable<'a>),
    /// Finished round with the revealed key
    Round(&'a RoundReceipt),
    Goodbye(&'a SessionSummary),
}

/// Tally of finished rounds, kept in memory only
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds: u64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// A game session over one validated move set
pub struct Session<R> {
    moves: MoveSet,
    engine: CommitmentEngine<R>,
    summary: SessionSummary,
}

impl<R: RandomSource> Session<R> {
    pub fn new(moves: MoveSet, engine: CommitmentEngine<R>) -> Self {
        Self {
            moves,
            engine,
            summary: SessionSummary::default(),
        }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Play rounds until the user quits or input closes.
    ///
    /// Entropy and console failures end the session with an error.
    pub async fn run<C: Console>(
        &mut self,
        console: &mut C,
    ) -> Result<SessionSummary, GameError> {
        info!(
            moves = self.moves.len(),
            digest = %self.engine.algorithm(),
            "Session started"
        );

        loop {
            let round = self.engine.begin_round(&self.moves)?;
            console.render(&SessionEvent::Commitment {
                round: round.number(),
                commitment: round.commitment(),
            })?;
            console.render(&SessionEvent::Menu(&self.moves))?;

            loop {
                let Some(line) = console.next_line().await? else {
                    debug!("Input closed");
                    return self.finish(console);
                };

                match Selection::parse(&line, &self.moves) {
                    Ok(Selection::Quit) => return self.finish(console),
                    Ok(Selection::Help) => {
                        let table = OutcomeTable::build(&self.moves);
                        console.render(&SessionEvent::Table(&table))?;
                        console.render(&SessionEvent::Menu(&self.moves))?;
                    }
                    Ok(Selection::Move(user)) => {
                        let receipt = round.play(user);
                        self.summary.record(receipt.outcome);
                        debug!(
                            round = receipt.round,
                            outcome = %receipt.outcome,
                            "Round resolved"
                        );
                        console.render(&SessionEvent::Round(&receipt))?;
                        break;
                    }
                    Err(GameError::InvalidSelection(input)) => {
                        debug!(%input, "Rejected selection");
                        console.render(&SessionEvent::InvalidSelection(&input))?;
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }

    fn finish<C: Console>(&self, console: &mut C) -> Result<SessionSummary, GameError> {
        info!(
            rounds = self.summary.rounds,
            wins = self.summary.wins,
            losses = self.summary.losses,
            draws = self.summary.draws,
            "Session finished"
        );
        console.render(&SessionEvent::Goodbye(&self.summary))?;
        Ok(self.summary.clone())
    }
}
